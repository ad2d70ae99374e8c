use axum::{Json, extract::State};
use serde_json::json;

use crate::{
    AppState,
    error::{AppError, Result},
    models::ContactRequest,
    services::email_service,
};

pub async fn send_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<serde_json::Value>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("El nombre es obligatorio".to_string()));
    }

    if payload.email.is_empty() || !payload.email.contains('@') {
        return Err(AppError::BadRequest("Email inválido".to_string()));
    }

    if payload.message.trim().is_empty() {
        return Err(AppError::BadRequest("El mensaje es obligatorio".to_string()));
    }

    email_service::send_contact_message(
        &state.ses_client,
        &state.mail.sender_email,
        &state.mail.notify_email,
        &payload,
    )
    .await?;

    Ok(Json(json!({ "message": "Mensaje enviado" })))
}
