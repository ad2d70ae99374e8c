use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status is free-form by design; the admin UI uses
/// pending / contacted / completed / cancelled.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Quote {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub product_interest: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateQuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub product_interest: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuoteStatusRequest {
    pub status: String,
}
