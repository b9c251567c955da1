use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{Report, ReportStatus, StatusUpdate};

/// Storage for reports
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// All reports, most recently created first
    async fn list_newest_first(&self) -> Result<Vec<Report>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Report>>;

    /// Apply `update` atomically. `None` when no report has this id.
    async fn update_status(&self, id: &str, update: &StatusUpdate) -> Result<Option<Report>>;

    /// Insert unless a report with the same id exists. Returns whether a row was written.
    async fn insert_if_absent(&self, report: &Report) -> Result<bool>;
}

/// Row shape of the `reports` table
#[derive(Debug, FromRow)]
struct ReportRow {
    id: String,
    user_id: String,
    photo_url: Option<String>,
    latitude: f64,
    longitude: f64,
    locality: String,
    description: String,
    ai_category: String,
    ai_summary: Option<String>,
    ai_severity_score: Option<f64>,
    ai_urgency_level: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    resolved_by: Option<String>,
    resolved_at: Option<DateTime<Utc>>,
    reopen_count: i32,
}

impl From<ReportRow> for Report {
    fn from(row: ReportRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            photo_url: row.photo_url,
            latitude: row.latitude,
            longitude: row.longitude,
            locality: row.locality,
            description: row.description,
            ai_category: row.ai_category,
            ai_summary: row.ai_summary,
            ai_severity_score: row.ai_severity_score,
            ai_urgency_level: row.ai_urgency_level,
            status: ReportStatus::from(row.status),
            created_at: row.created_at,
            updated_at: row.updated_at,
            resolved_by: row.resolved_by,
            resolved_at: row.resolved_at,
            reopen_count: row.reopen_count,
        }
    }
}

/// PostgreSQL-backed report repository
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn list_newest_first(&self) -> Result<Vec<Report>> {
        let rows = sqlx::query_as::<_, ReportRow>(
            r#"
            SELECT
                id, user_id, photo_url, latitude, longitude, locality, description,
                ai_category, ai_summary, ai_severity_score, ai_urgency_level,
                status, created_at, updated_at, resolved_by, resolved_at, reopen_count
            FROM reports
            ORDER BY created_at DESC, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reports: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(Report::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Report>> {
        let row = sqlx::query_as::<_, ReportRow>(
            r#"
            SELECT
                id, user_id, photo_url, latitude, longitude, locality, description,
                ai_category, ai_summary, ai_severity_score, ai_urgency_level,
                status, created_at, updated_at, resolved_by, resolved_at, reopen_count
            FROM reports
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get report: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(row.map(Report::from))
    }

    async fn update_status(&self, id: &str, update: &StatusUpdate) -> Result<Option<Report>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin status update transaction: {:?}", e);
            AppError::Database(e)
        })?;

        // Row lock so concurrent updates see each other's reopen transitions
        let row = sqlx::query_as::<_, ReportRow>(
            r#"
            SELECT
                id, user_id, photo_url, latitude, longitude, locality, description,
                ai_category, ai_summary, ai_severity_score, ai_urgency_level,
                status, created_at, updated_at, resolved_by, resolved_at, reopen_count
            FROM reports
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to lock report for status update: {:?}", e);
            AppError::Database(e)
        })?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut report = Report::from(row);
        report.apply_status_update(update, Utc::now());

        sqlx::query(
            r#"
            UPDATE reports
            SET status = $2, resolved_by = $3, resolved_at = $4,
                updated_at = $5, reopen_count = $6
            WHERE id = $1
            "#,
        )
        .bind(&report.id)
        .bind(report.status.as_str())
        .bind(&report.resolved_by)
        .bind(report.resolved_at)
        .bind(report.updated_at)
        .bind(report.reopen_count)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update report status: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit status update: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(Some(report))
    }

    async fn insert_if_absent(&self, report: &Report) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO reports (
                id, user_id, photo_url, latitude, longitude, locality, description,
                ai_category, ai_summary, ai_severity_score, ai_urgency_level,
                status, created_at, updated_at, resolved_by, resolved_at, reopen_count
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(&report.id)
        .bind(&report.user_id)
        .bind(&report.photo_url)
        .bind(report.latitude)
        .bind(report.longitude)
        .bind(&report.locality)
        .bind(&report.description)
        .bind(&report.ai_category)
        .bind(&report.ai_summary)
        .bind(report.ai_severity_score)
        .bind(&report.ai_urgency_level)
        .bind(report.status.as_str())
        .bind(report.created_at)
        .bind(report.updated_at)
        .bind(&report.resolved_by)
        .bind(report.resolved_at)
        .bind(report.reopen_count)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert report {}: {:?}", report.id, e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected() == 1)
    }
}
