use axum::{
    Json,
    extract::{Path, State},
};

use http::StatusCode;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{CreateQuoteRequest, Quote, UpdateQuoteStatusRequest},
    queries::quote_queries,
    services::email_service,
};

pub async fn create_quote(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuoteRequest>,
) -> Result<Json<Quote>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("El nombre es obligatorio".to_string()));
    }

    if payload.email.is_empty() || !payload.email.contains('@') {
        return Err(AppError::BadRequest("Email inválido".to_string()));
    }

    let quote = quote_queries::create_quote(&state.db, &payload).await?;

    // The quote is already persisted; a failed notification is logged and
    // never surfaced to the visitor.
    if let Err(e) = email_service::send_quote_notification(
        &state.ses_client,
        &state.mail.sender_email,
        &state.mail.notify_email,
        &quote,
    )
    .await
    {
        tracing::error!("Quote notification for #{} failed: {}", quote.id, e);
    }

    Ok(Json(quote))
}

pub async fn list_quotes(State(state): State<AppState>) -> Result<Json<Vec<Quote>>> {
    let quotes = quote_queries::get_all(&state.db).await?;

    Ok(Json(quotes))
}

pub async fn update_quote_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateQuoteStatusRequest>,
) -> Result<Json<Quote>> {
    if payload.status.trim().is_empty() {
        return Err(AppError::BadRequest("El estado es obligatorio".to_string()));
    }

    let quote = quote_queries::update_status(&state.db, id, payload.status.trim())
        .await?
        .ok_or_else(|| AppError::NotFound("Cotización no encontrada".to_string()))?;

    Ok(Json(quote))
}

pub async fn delete_quote(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let deleted = quote_queries::delete_quote(&state.db, id).await?;

    if deleted == 0 {
        return Err(AppError::NotFound("Cotización no encontrada".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
