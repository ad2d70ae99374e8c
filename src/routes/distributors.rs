use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{Distributor, DistributorRequest},
    queries::distributor_queries,
};

/// Public listing: active distributors only.
pub async fn list_distributors(State(state): State<AppState>) -> Result<Json<Vec<Distributor>>> {
    let distributors = distributor_queries::get_all(&state.db, true).await?;

    Ok(Json(distributors))
}

/// Admin listing: includes deactivated records.
pub async fn list_all_distributors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Distributor>>> {
    let distributors = distributor_queries::get_all(&state.db, false).await?;

    Ok(Json(distributors))
}

pub async fn create_distributor(
    State(state): State<AppState>,
    Json(payload): Json<DistributorRequest>,
) -> Result<Json<Distributor>> {
    validate_distributor(&payload)?;

    let distributor = distributor_queries::create_distributor(&state.db, &payload).await?;

    Ok(Json(distributor))
}

pub async fn update_distributor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<DistributorRequest>,
) -> Result<Json<Distributor>> {
    validate_distributor(&payload)?;

    let distributor = distributor_queries::update_distributor(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Distribuidor no encontrado".to_string()))?;

    Ok(Json(distributor))
}

/// Delete is soft: the record is flagged inactive and drops out of the
/// public listing.
pub async fn delete_distributor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Distributor>> {
    let distributor = distributor_queries::deactivate_distributor(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Distribuidor no encontrado".to_string()))?;

    Ok(Json(distributor))
}

fn validate_distributor(payload: &DistributorRequest) -> Result<()> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("El nombre es obligatorio".to_string()));
    }

    if let Some(email) = &payload.email {
        if !email.is_empty() && !email.contains('@') {
            return Err(AppError::BadRequest("Email inválido".to_string()));
        }
    }

    Ok(())
}
