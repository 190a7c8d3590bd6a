//! Persistence sink for finished analyses.
//!
//! Carried in `AppState` as `Arc<dyn AnalysisStore>` so handlers stay
//! agnostic about the backing store. Saving is best-effort from the caller's
//! point of view: the analyze handlers log a failed insert and still return
//! the report.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

/// A finished analysis ready to be recorded for a user.
pub struct NewAnalysisRecord<'a> {
    pub user_id: Uuid,
    pub file_name: &'a str,
    pub file_content: &'a str,
    pub ats_score: i16,
    pub analysis_data: &'a serde_json::Value,
}

#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Inserts a record and returns its id.
    async fn save(&self, record: NewAnalysisRecord<'_>) -> Result<Uuid, AppError>;
}

/// Postgres-backed store over the `resumes` table.
pub struct PgAnalysisStore {
    pool: PgPool,
}

impl PgAnalysisStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalysisStore for PgAnalysisStore {
    async fn save(&self, record: NewAnalysisRecord<'_>) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO resumes (id, user_id, file_name, file_content, ats_score, analysis_data)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id)
        .bind(record.user_id)
        .bind(record.file_name)
        .bind(record.file_content)
        .bind(record.ats_score)
        .bind(record.analysis_data)
        .execute(&self.pool)
        .await?;

        info!("Stored analysis {} for user {}", id, record.user_id);
        Ok(id)
    }
}
