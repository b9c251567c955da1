use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::auth::models::{Admin, NewAdmin};

/// Credential storage for admins
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>>;

    /// Insert unless the email is taken. Returns whether a row was written.
    async fn insert_if_absent(&self, admin: &NewAdmin) -> Result<bool>;
}

pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>> {
        sqlx::query_as::<_, Admin>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM admins
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get admin by email: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn insert_if_absent(&self, admin: &NewAdmin) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO admins (email, password_hash)
            VALUES ($1, $2)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(&admin.email)
        .bind(&admin.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert admin: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected() == 1)
    }
}
