mod auth;
mod categories;
mod contact;
mod distributors;
mod health;
mod products;
mod quotes;
mod upload;

use axum::{
    Router, middleware,
    routing::{get, patch, post, put},
};

use crate::{AppState, middleware::admin_middleware};

pub fn create_router() -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/api/products", post(products::create_product))
        .route("/api/products/preview", post(products::preview_product))
        .route(
            "/api/products/{slug}",
            put(products::update_product).delete(products::delete_product),
        )
        .route("/api/categories", post(categories::create_category))
        .route(
            "/api/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route("/api/distributors", post(distributors::create_distributor))
        .route("/api/distributors/all", get(distributors::list_all_distributors))
        .route(
            "/api/distributors/{id}",
            put(distributors::update_distributor).delete(distributors::delete_distributor),
        )
        .route("/api/quotes", get(quotes::list_quotes))
        .route(
            "/api/quotes/{id}",
            patch(quotes::update_quote_status).delete(quotes::delete_quote),
        )
        .route("/api/upload", post(upload::upload_file))
        .layer(middleware::from_fn(admin_middleware));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api/products", get(products::list_products))
        .route("/api/products/{slug}", get(products::get_product))
        .route("/api/products/{slug}/display", get(products::get_product_display))
        .route("/api/categories", get(categories::list_categories))
        .route("/api/distributors", get(distributors::list_distributors))
        .route("/api/quotes", post(quotes::create_quote))
        .route("/api/contact", post(contact::send_contact))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .merge(admin_routes)
}

/// Slugs are URL path segments: lowercase ASCII, digits and hyphens only.
pub(crate) fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::is_valid_slug;

    #[test]
    fn valid_slugs() {
        assert!(is_valid_slug("camara-bullet-4k"));
        assert!(is_valid_slug("nvr-16ch"));
    }

    #[test]
    fn invalid_slugs() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Cámara"));
        assert!(!is_valid_slug("with space"));
        assert!(!is_valid_slug("Upper-Case"));
        assert!(!is_valid_slug("under_score"));
    }
}
