use axum::{
    Json,
    extract::{Path, State},
};

use http::StatusCode;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{Category, CreateCategoryRequest, UpdateCategoryRequest},
    queries::category_queries,
    routes::is_valid_slug,
};

pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = category_queries::get_all(&state.db).await?;

    Ok(Json(categories))
}

pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<Json<Category>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("El nombre es obligatorio".to_string()));
    }

    if !is_valid_slug(&payload.slug) {
        return Err(AppError::BadRequest(
            "El slug debe contener solo minúsculas, números y guiones".to_string(),
        ));
    }

    if category_queries::find_by_slug(&state.db, &payload.slug)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(format!(
            "Ya existe una categoría con el slug {}",
            payload.slug
        )));
    }

    let category = category_queries::create_category(&state.db, &payload).await?;

    Ok(Json(category))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> Result<Json<Category>> {
    if let Some(slug) = &payload.slug {
        if !is_valid_slug(slug) {
            return Err(AppError::BadRequest(
                "El slug debe contener solo minúsculas, números y guiones".to_string(),
            ));
        }

        if let Some(existing) = category_queries::find_by_slug(&state.db, slug).await? {
            if existing.id != id {
                return Err(AppError::Conflict(format!(
                    "Ya existe una categoría con el slug {}",
                    slug
                )));
            }
        }
    }

    let category = category_queries::update_category(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Categoría no encontrada".to_string()))?;

    Ok(Json(category))
}

/// Category deletion nulls product references; it never removes products.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    if category_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound("Categoría no encontrada".to_string()));
    }

    category_queries::delete_category(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
