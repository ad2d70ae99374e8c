use axum::{extract::Request, middleware::Next, response::Response};

use crate::error::AppError;

pub const SESSION_COOKIE: &str = "admin_session";

/// Gate for the admin route group: a valid session cookie or nothing.
pub async fn admin_middleware(mut req: Request, next: Next) -> Result<Response, AppError> {
    let cookie_header = req
        .headers()
        .get(http::header::COOKIE)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Autenticación requerida".to_string()))?;

    let token = session_cookie_value(cookie_header)
        .ok_or_else(|| AppError::Unauthorized("Autenticación requerida".to_string()))?;

    let claims = crate::utils::jwt::verify_session_token(token)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

fn session_cookie_value(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_found_among_others() {
        let header = "theme=dark; admin_session=abc.def.ghi; lang=es";
        assert_eq!(session_cookie_value(header), Some("abc.def.ghi"));
    }

    #[test]
    fn missing_session_cookie_is_none() {
        assert_eq!(session_cookie_value("theme=dark; lang=es"), None);
        assert_eq!(session_cookie_value(""), None);
    }

    #[test]
    fn cookie_name_must_match_exactly() {
        assert_eq!(session_cookie_value("xadmin_session=tok"), None);
        assert_eq!(session_cookie_value("admin_session_old=tok"), None);
    }
}
