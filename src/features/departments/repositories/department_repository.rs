use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::departments::models::{Department, NewDepartment};

/// Credential storage for departments
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Department>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Department>>;

    /// Insert unless the name or email is taken. Returns whether a row was written.
    async fn insert_if_absent(&self, department: &NewDepartment) -> Result<bool>;
}

pub struct PgDepartmentRepository {
    pool: PgPool,
}

impl PgDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for PgDepartmentRepository {
    async fn list(&self) -> Result<Vec<Department>> {
        sqlx::query_as::<_, Department>(
            r#"
            SELECT id, name, email, password_hash, display_name, description, created_at
            FROM departments
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list departments: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Department>> {
        sqlx::query_as::<_, Department>(
            r#"
            SELECT id, name, email, password_hash, display_name, description, created_at
            FROM departments
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get department by email: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn insert_if_absent(&self, department: &NewDepartment) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO departments (name, email, password_hash, display_name, description)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(&department.name)
        .bind(&department.email)
        .bind(&department.password_hash)
        .bind(&department.display_name)
        .bind(&department.description)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert department {}: {:?}", department.name, e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected() == 1)
    }
}
