use axum::{
    Json,
    extract::{Path, Query, State},
};

use http::StatusCode;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{
        Category, DisplayQuery, PreviewRequest, Product, ProductRequest, ProductResponse,
        ProductVariant, SpecEntry, VariantInput,
    },
    presentation::{self, ProductContent, ProductDisplay, VariantContent},
    queries::{category_queries, product_queries},
    routes::is_valid_slug,
};

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = product_queries::get_all(&state.db).await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProductResponse>> {
    let (product, category, variants) = fetch_product(&state, &slug).await?;

    Ok(Json(ProductResponse {
        data: product,
        category,
        variants,
    }))
}

/// Public product page: the resolver output for a stored product. Variant
/// selection is a query parameter; re-requesting with another variant is a
/// pure re-render over the same records.
pub async fn get_product_display(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<DisplayQuery>,
) -> Result<Json<ProductDisplay>> {
    let (product, category, variants) = fetch_product(&state, &slug).await?;

    let content = ProductContent::from_record(&product, category.as_ref());
    let variant_contents: Vec<VariantContent> = variants.iter().map(VariantContent::from).collect();

    let selected = query
        .variant
        .and_then(|id| variants.iter().position(|v| v.id == id));

    Ok(Json(presentation::resolve(
        &content,
        &variant_contents,
        selected,
    )))
}

/// Admin live preview: the same resolution over unsaved form state. Nothing
/// is persisted; the form re-posts its current draft on every change.
pub async fn preview_product(Json(payload): Json<PreviewRequest>) -> Json<ProductDisplay> {
    let variants: Vec<VariantContent> = payload.variants.iter().map(VariantContent::from).collect();
    let selected = payload.selected_variant;
    let content = draft_content(payload);

    Json(presentation::resolve(&content, &variants, selected))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<ProductResponse>> {
    validate_product(&payload)?;

    if product_queries::find_by_slug(&state.db, &payload.slug)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(format!(
            "Ya existe un producto con el slug {}",
            payload.slug
        )));
    }

    let product = product_queries::create_product(&state.db, &payload).await?;
    let category = find_category(&state, product.category_id).await?;
    let variants = product_queries::find_variants(&state.db, product.id).await?;

    Ok(Json(ProductResponse {
        data: product,
        category,
        variants,
    }))
}

/// Products are addressed by slug everywhere in the API; the payload may
/// carry a new slug, which renames the product.
pub async fn update_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<ProductResponse>> {
    validate_product(&payload)?;

    let current = product_queries::find_by_slug(&state.db, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Producto no encontrado".to_string()))?;

    if let Some(existing) = product_queries::find_by_slug(&state.db, &payload.slug).await? {
        if existing.id != current.id {
            return Err(AppError::Conflict(format!(
                "Ya existe un producto con el slug {}",
                payload.slug
            )));
        }
    }

    let product = product_queries::update_product(&state.db, current.id, &payload).await?;
    let category = find_category(&state, product.category_id).await?;
    let variants = product_queries::find_variants(&state.db, product.id).await?;

    Ok(Json(ProductResponse {
        data: product,
        category,
        variants,
    }))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<StatusCode> {
    let product = product_queries::find_by_slug(&state.db, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Producto no encontrado".to_string()))?;

    product_queries::delete_product(&state.db, product.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn fetch_product(
    state: &AppState,
    slug: &str,
) -> Result<(Product, Option<Category>, Vec<ProductVariant>)> {
    let product = product_queries::find_by_slug(&state.db, slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Producto no encontrado".to_string()))?;

    let category = find_category(state, product.category_id).await?;
    let variants = product_queries::find_variants(&state.db, product.id).await?;

    Ok((product, category, variants))
}

async fn find_category(state: &AppState, category_id: Option<i32>) -> Result<Option<Category>> {
    match category_id {
        Some(id) => category_queries::find_by_id(&state.db, id).await,
        None => Ok(None),
    }
}

fn validate_product(payload: &ProductRequest) -> Result<()> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("El nombre es obligatorio".to_string()));
    }

    if !is_valid_slug(&payload.slug) {
        return Err(AppError::BadRequest(
            "El slug debe contener solo minúsculas, números y guiones".to_string(),
        ));
    }

    if let Some(variants) = &payload.variants {
        if variants.iter().any(|v: &VariantInput| v.name.trim().is_empty()) {
            return Err(AppError::BadRequest(
                "Cada variante necesita un nombre".to_string(),
            ));
        }
    }

    Ok(())
}

fn draft_content(payload: PreviewRequest) -> ProductContent {
    let specs: Vec<SpecEntry> = payload.specs;

    ProductContent {
        name: payload.name,
        model: payload.model,
        subtitle: non_empty(payload.subtitle),
        description: non_empty(payload.description),
        badge: non_empty(payload.badge),
        main_image: non_empty(payload.main_image),
        night_vision_image: non_empty(payload.night_vision_image),
        app_demo_image: non_empty(payload.app_demo_image),
        app_demo_badge: non_empty(payload.app_demo_badge),
        app_demo_title: non_empty(payload.app_demo_title),
        app_demo_description: non_empty(payload.app_demo_description),
        ai_section_title: non_empty(payload.ai_section_title),
        ai_section_description: non_empty(payload.ai_section_description),
        ai_icon: non_empty(payload.ai_icon),
        night_vision_title: non_empty(payload.night_vision_title),
        night_vision_description: non_empty(payload.night_vision_description),
        night_vision_icon: non_empty(payload.night_vision_icon),
        specs_title: non_empty(payload.specs_title),
        specs_description: non_empty(payload.specs_description),
        specs_icon: non_empty(payload.specs_icon),
        guarantee_icon: non_empty(payload.guarantee_icon),
        guarantee_text: non_empty(payload.guarantee_text),
        support_icon: non_empty(payload.support_icon),
        support_text: non_empty(payload.support_text),
        resolution_options: presentation::split_list(&payload.resolution_options),
        ai_detection: presentation::split_list(&payload.ai_detection),
        specs,
        category_slug: non_empty(payload.category_slug),
        category_name: non_empty(payload.category_name),
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_lists_are_parsed_from_textarea_strings() {
        let payload = PreviewRequest {
            name: "Domo".to_string(),
            ai_detection: "Personas, Vehículos".to_string(),
            resolution_options: "4K, 2K".to_string(),
            ..Default::default()
        };

        let content = draft_content(payload);

        assert_eq!(content.ai_detection, vec!["Personas", "Vehículos"]);
        assert_eq!(content.resolution_options, vec!["4K", "2K"]);
    }

    #[test]
    fn blank_draft_fields_become_absent() {
        let payload = PreviewRequest {
            name: "Domo".to_string(),
            subtitle: "  ".to_string(),
            badge: "Nuevo".to_string(),
            ..Default::default()
        };

        let content = draft_content(payload);

        assert_eq!(content.subtitle, None);
        assert_eq!(content.badge.as_deref(), Some("Nuevo"));
    }
}
