use sqlx::{PgPool, Postgres, Transaction, types::Json};

use crate::{
    error::Result,
    models::{Product, ProductRequest, ProductVariant, SpecEntry, VariantInput},
    presentation::{SPEC_SLOTS, resolve_slot},
};

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE slug = $1")
        .bind(slug)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY name ASC")
        .fetch_all(pool)
        .await?;

    Ok(products)
}

/// Variants in creation order; position is assigned on insert.
pub async fn find_variants(pool: &PgPool, product_id: i32) -> Result<Vec<ProductVariant>> {
    let variants = sqlx::query_as::<_, ProductVariant>(
        "SELECT * FROM product_variants WHERE product_id = $1 ORDER BY position ASC, id ASC",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await?;

    Ok(variants)
}

pub async fn create_product(pool: &PgPool, req: &ProductRequest) -> Result<Product> {
    let mut tx = pool.begin().await?;

    let product = insert_product(&mut tx, req).await?;

    if let Some(variants) = &req.variants {
        insert_variants(&mut tx, product.id, variants).await?;
    }

    tx.commit().await?;

    Ok(product)
}

/// Wholesale replace: the admin form always submits the full record, so the
/// update rewrites every column (last-write-wins). A present variant list
/// replaces all variants; delete + re-insert stay in one transaction.
pub async fn update_product(pool: &PgPool, id: i32, req: &ProductRequest) -> Result<Product> {
    let mut tx = pool.begin().await?;

    let (protection, compression, lens, power) = derived_scalars(&req.specs);

    let product = sqlx::query_as::<_, Product>(
        "UPDATE products SET
            slug = $1, name = $2, model = $3, subtitle = $4, description = $5,
            badge = $6, category_id = $7,
            main_image = $8, night_vision_image = $9, app_demo_image = $10,
            app_demo_badge = $11, app_demo_title = $12, app_demo_description = $13,
            ai_section_title = $14, ai_section_description = $15, ai_icon = $16,
            night_vision_title = $17, night_vision_description = $18, night_vision_icon = $19,
            specs_title = $20, specs_description = $21, specs_icon = $22,
            guarantee_icon = $23, guarantee_text = $24, support_icon = $25, support_text = $26,
            protection = $27, compression = $28, lens = $29, power = $30,
            resolution_options = $31, ai_detection = $32, specs = $33,
            updated_at = NOW()
         WHERE id = $34
         RETURNING *",
    )
    .bind(&req.slug)
    .bind(&req.name)
    .bind(&req.model)
    .bind(&req.subtitle)
    .bind(&req.description)
    .bind(&req.badge)
    .bind(req.category_id)
    .bind(&req.main_image)
    .bind(&req.night_vision_image)
    .bind(&req.app_demo_image)
    .bind(&req.app_demo_badge)
    .bind(&req.app_demo_title)
    .bind(&req.app_demo_description)
    .bind(&req.ai_section_title)
    .bind(&req.ai_section_description)
    .bind(&req.ai_icon)
    .bind(&req.night_vision_title)
    .bind(&req.night_vision_description)
    .bind(&req.night_vision_icon)
    .bind(&req.specs_title)
    .bind(&req.specs_description)
    .bind(&req.specs_icon)
    .bind(&req.guarantee_icon)
    .bind(&req.guarantee_text)
    .bind(&req.support_icon)
    .bind(&req.support_text)
    .bind(protection)
    .bind(compression)
    .bind(lens)
    .bind(power)
    .bind(&req.resolution_options)
    .bind(&req.ai_detection)
    .bind(Json(&req.specs))
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    if let Some(variants) = &req.variants {
        sqlx::query("DELETE FROM product_variants WHERE product_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        insert_variants(&mut tx, id, variants).await?;
    }

    tx.commit().await?;

    Ok(product)
}

pub async fn delete_product(pool: &PgPool, id: i32) -> Result<()> {
    // Variants go with it via ON DELETE CASCADE.
    sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

async fn insert_product(
    tx: &mut Transaction<'_, Postgres>,
    req: &ProductRequest,
) -> Result<Product> {
    let (protection, compression, lens, power) = derived_scalars(&req.specs);

    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (
            slug, name, model, subtitle, description, badge, category_id,
            main_image, night_vision_image, app_demo_image,
            app_demo_badge, app_demo_title, app_demo_description,
            ai_section_title, ai_section_description, ai_icon,
            night_vision_title, night_vision_description, night_vision_icon,
            specs_title, specs_description, specs_icon,
            guarantee_icon, guarantee_text, support_icon, support_text,
            protection, compression, lens, power,
            resolution_options, ai_detection, specs
         ) VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
            $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28,
            $29, $30, $31, $32, $33
         )
         RETURNING *",
    )
    .bind(&req.slug)
    .bind(&req.name)
    .bind(&req.model)
    .bind(&req.subtitle)
    .bind(&req.description)
    .bind(&req.badge)
    .bind(req.category_id)
    .bind(&req.main_image)
    .bind(&req.night_vision_image)
    .bind(&req.app_demo_image)
    .bind(&req.app_demo_badge)
    .bind(&req.app_demo_title)
    .bind(&req.app_demo_description)
    .bind(&req.ai_section_title)
    .bind(&req.ai_section_description)
    .bind(&req.ai_icon)
    .bind(&req.night_vision_title)
    .bind(&req.night_vision_description)
    .bind(&req.night_vision_icon)
    .bind(&req.specs_title)
    .bind(&req.specs_description)
    .bind(&req.specs_icon)
    .bind(&req.guarantee_icon)
    .bind(&req.guarantee_text)
    .bind(&req.support_icon)
    .bind(&req.support_text)
    .bind(protection)
    .bind(compression)
    .bind(lens)
    .bind(power)
    .bind(&req.resolution_options)
    .bind(&req.ai_detection)
    .bind(Json(&req.specs))
    .fetch_one(&mut **tx)
    .await?;

    Ok(product)
}

async fn insert_variants(
    tx: &mut Transaction<'_, Postgres>,
    product_id: i32,
    variants: &[VariantInput],
) -> Result<()> {
    for (position, variant) in variants.iter().enumerate() {
        sqlx::query(
            "INSERT INTO product_variants
                (product_id, name, description, manual_url, datasheet_url, position)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(product_id)
        .bind(&variant.name)
        .bind(&variant.description)
        .bind(&variant.manual_url)
        .bind(&variant.datasheet_url)
        .bind(position as i32)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

/// The four scalar spec columns are derived from the submitted specs list
/// with the same alias matcher the resolver uses, so what is saved and what
/// is displayed cannot disagree.
fn derived_scalars(
    specs: &[SpecEntry],
) -> (Option<String>, Option<String>, Option<String>, Option<String>) {
    let mut values = SPEC_SLOTS
        .iter()
        .map(|&slot| resolve_slot(slot, specs).map(str::to_string));

    (
        values.next().flatten(),
        values.next().flatten(),
        values.next().flatten(),
        values.next().flatten(),
    )
}
