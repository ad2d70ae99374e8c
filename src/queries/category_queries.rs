use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Category, CreateCategoryRequest, UpdateCategoryRequest},
};

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(category)
}

pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE slug = $1")
        .bind(slug)
        .fetch_optional(pool)
        .await?;

    Ok(category)
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name ASC")
        .fetch_all(pool)
        .await?;

    Ok(categories)
}

pub async fn create_category(pool: &PgPool, req: &CreateCategoryRequest) -> Result<Category> {
    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (slug, name, icon, description)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(&req.slug)
    .bind(&req.name)
    .bind(&req.icon)
    .bind(&req.description)
    .fetch_one(pool)
    .await?;

    Ok(category)
}

pub async fn update_category(
    pool: &PgPool,
    id: i32,
    req: &UpdateCategoryRequest,
) -> Result<Option<Category>> {
    let mut query_builder = sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE categories SET ");
    let mut has_fields = false;

    if let Some(slug) = &req.slug {
        query_builder.push("slug = ");
        query_builder.push_bind(slug);
        has_fields = true;
    }

    if let Some(name) = &req.name {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("name = ");
        query_builder.push_bind(name);
        has_fields = true;
    }

    if let Some(icon) = &req.icon {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("icon = ");
        query_builder.push_bind(icon);
        has_fields = true;
    }

    if let Some(description) = &req.description {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("description = ");
        query_builder.push_bind(description);
        has_fields = true;
    }

    if !has_fields {
        return find_by_id(pool, id).await;
    }

    query_builder.push(", updated_at = NOW() WHERE id = ");
    query_builder.push_bind(id);
    query_builder.push(" RETURNING *");

    let category = query_builder
        .build_query_as::<Category>()
        .fetch_optional(pool)
        .await?;

    Ok(category)
}

/// Products keep existing with a nulled reference: the FK is declared
/// ON DELETE SET NULL, never a cascade.
pub async fn delete_category(pool: &PgPool, id: i32) -> Result<()> {
    sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
