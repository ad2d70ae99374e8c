use axum::{Json, extract::{Multipart, State}};

use crate::{
    AppState,
    error::{AppError, Result},
    models::UploadResponse,
    services::upload_service,
};

/// Accepts a single multipart file field, stores it under the upload
/// directory and returns the public URL.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Formulario inválido: {}", e)))?
    {
        if field.file_name().is_none() {
            continue;
        }

        let content_type = field
            .content_type()
            .ok_or_else(|| AppError::BadRequest("Tipo de archivo desconocido".to_string()))?
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("No se pudo leer el archivo: {}", e)))?;

        if data.is_empty() {
            return Err(AppError::BadRequest("El archivo está vacío".to_string()));
        }

        let file_name = upload_service::store_image(&state.upload.dir, &content_type, &data).await?;

        return Ok(Json(UploadResponse {
            url: format!("{}/{}", state.upload.public_base_url, file_name),
        }));
    }

    Err(AppError::BadRequest("No se envió ningún archivo".to_string()))
}
