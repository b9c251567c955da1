use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for department. The `name` is the routing key.
#[derive(Debug, Clone, FromRow)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a department during seeding
#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub description: String,
}
