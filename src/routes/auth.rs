use axum::{
    Json,
    extract::State,
    http::{HeaderValue, header::SET_COOKIE},
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    error::{AppError, Result},
    middleware::SESSION_COOKIE,
    models::{AuthResponse, LoginRequest},
    queries::admin_queries,
    utils::jwt,
};

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response> {
    let admin = admin_queries::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

    let is_valid = bcrypt::verify(&payload.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {}", e)))?;

    if !is_valid {
        return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
    }

    let token = jwt::generate_session_token(admin.id, &admin.email)?;

    let cookie = format!(
        "{}={}; HttpOnly; Path=/; Max-Age={}; SameSite=Lax",
        SESSION_COOKIE,
        token,
        60 * 60 * 24 * jwt::SESSION_TTL_DAYS
    );

    tracing::info!("Admin {} logged in", admin.email);

    with_cookie(Json(AuthResponse { email: admin.email }), &cookie)
}

pub async fn logout() -> Result<Response> {
    let cookie = format!("{}=; HttpOnly; Path=/; Max-Age=0; SameSite=Lax", SESSION_COOKIE);

    with_cookie(
        Json(serde_json::json!({ "message": "Sesión cerrada" })),
        &cookie,
    )
}

fn with_cookie(body: impl IntoResponse, cookie: &str) -> Result<Response> {
    let value = HeaderValue::from_str(cookie)
        .map_err(|_| AppError::InternalError("Invalid cookie value".to_string()))?;

    let mut response = body.into_response();
    response.headers_mut().insert(SET_COOKIE, value);

    Ok(response)
}
