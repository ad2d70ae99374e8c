use sqlx::PgPool;

use crate::{
    error::Result,
    models::{CreateQuoteRequest, Quote},
};

pub async fn get_all(pool: &PgPool) -> Result<Vec<Quote>> {
    let quotes = sqlx::query_as::<_, Quote>("SELECT * FROM quotes ORDER BY created_at DESC")
        .fetch_all(pool)
        .await?;

    Ok(quotes)
}

pub async fn create_quote(pool: &PgPool, req: &CreateQuoteRequest) -> Result<Quote> {
    let quote = sqlx::query_as::<_, Quote>(
        "INSERT INTO quotes (name, email, phone, company, product_interest, message)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING *",
    )
    .bind(&req.name)
    .bind(&req.email)
    .bind(&req.phone)
    .bind(&req.company)
    .bind(&req.product_interest)
    .bind(&req.message)
    .fetch_one(pool)
    .await?;

    Ok(quote)
}

pub async fn update_status(pool: &PgPool, id: i32, status: &str) -> Result<Option<Quote>> {
    let quote = sqlx::query_as::<_, Quote>(
        "UPDATE quotes SET status = $1 WHERE id = $2 RETURNING *",
    )
    .bind(status)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(quote)
}

pub async fn delete_quote(pool: &PgPool, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM quotes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
