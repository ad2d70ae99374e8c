use sqlx::PgPool;

use crate::{error::Result, models::Admin};

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Admin>> {
    let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(admin)
}
