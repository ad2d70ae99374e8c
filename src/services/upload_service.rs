use std::path::Path;

use uuid::Uuid;

use crate::error::{AppError, Result};

/// Writes an uploaded image under the configured directory with a UUID name
/// and returns the file name. Only image content types are accepted.
pub async fn store_image(upload_dir: &str, content_type: &str, data: &[u8]) -> Result<String> {
    let extension = extension_for(content_type).ok_or_else(|| {
        AppError::BadRequest(format!("Tipo de archivo no soportado: {}", content_type))
    })?;

    let file_name = format!("{}.{}", Uuid::new_v4(), extension);
    let path = Path::new(upload_dir).join(&file_name);

    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("No se pudo crear el directorio: {}", e)))?;

    tokio::fs::write(&path, data)
        .await
        .map_err(|e| AppError::InternalError(format!("No se pudo guardar el archivo: {}", e)))?;

    tracing::info!("Stored upload {} ({} bytes)", file_name, data.len());

    Ok(file_name)
}

fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/svg+xml" => Some("svg"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_image_types_map_to_extensions() {
        assert_eq!(extension_for("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for("image/png"), Some("png"));
        assert_eq!(extension_for("image/webp"), Some("webp"));
    }

    #[test]
    fn non_image_types_are_rejected() {
        assert_eq!(extension_for("application/pdf"), None);
        assert_eq!(extension_for("text/html"), None);
    }
}
