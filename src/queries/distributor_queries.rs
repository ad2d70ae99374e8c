use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Distributor, DistributorRequest},
};

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Distributor>> {
    let distributor = sqlx::query_as::<_, Distributor>("SELECT * FROM distributors WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(distributor)
}

pub async fn get_all(pool: &PgPool, active_only: bool) -> Result<Vec<Distributor>> {
    let query = if active_only {
        "SELECT * FROM distributors WHERE is_active = true ORDER BY name ASC"
    } else {
        "SELECT * FROM distributors ORDER BY name ASC"
    };

    let distributors = sqlx::query_as::<_, Distributor>(query).fetch_all(pool).await?;

    Ok(distributors)
}

pub async fn create_distributor(pool: &PgPool, req: &DistributorRequest) -> Result<Distributor> {
    let distributor = sqlx::query_as::<_, Distributor>(
        "INSERT INTO distributors (name, address, city, phone, email, website, is_active)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING *",
    )
    .bind(&req.name)
    .bind(&req.address)
    .bind(&req.city)
    .bind(&req.phone)
    .bind(&req.email)
    .bind(&req.website)
    .bind(req.is_active)
    .fetch_one(pool)
    .await?;

    Ok(distributor)
}

pub async fn update_distributor(
    pool: &PgPool,
    id: i32,
    req: &DistributorRequest,
) -> Result<Option<Distributor>> {
    let distributor = sqlx::query_as::<_, Distributor>(
        "UPDATE distributors SET
            name = $1, address = $2, city = $3, phone = $4, email = $5,
            website = $6, is_active = $7, updated_at = NOW()
         WHERE id = $8
         RETURNING *",
    )
    .bind(&req.name)
    .bind(&req.address)
    .bind(&req.city)
    .bind(&req.phone)
    .bind(&req.email)
    .bind(&req.website)
    .bind(req.is_active)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(distributor)
}

/// Soft delete: the record stays for the admin list, the public list filters
/// on is_active.
pub async fn deactivate_distributor(pool: &PgPool, id: i32) -> Result<Option<Distributor>> {
    let distributor = sqlx::query_as::<_, Distributor>(
        "UPDATE distributors SET is_active = false, updated_at = NOW()
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(distributor)
}
