mod app_config;
mod ses_config;

pub use app_config::{
    AppConfig, CorsConfig, DatabaseConfig, MailConfig, ServerConfig, UploadConfig,
};
pub use ses_config::*;
