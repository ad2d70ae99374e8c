pub mod email_service;
pub mod upload_service;
