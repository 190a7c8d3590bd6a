//! HTTP handlers for the analysis API.

use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::analyze_resume;
use crate::analysis::intake::{decode_text, is_supported_upload};
use crate::analysis::report::AnalysisReport;
use crate::analysis::scoring::rating;
use crate::analysis::store::NewAnalysisRecord;
use crate::errors::AppError;
use crate::models::resume::{ResumeRow, ResumeSummary};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub content: String,
    pub file_name: Option<String>,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Id of the stored record. Absent for anonymous requests and when the
    /// insert failed; the analysis itself is always present.
    pub resume_id: Option<Uuid>,
    pub file_name: String,
    pub rating: &'static str,
    pub analysis: AnalysisReport,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyses
///
/// Multipart upload: a `file` part plus an optional `user_id` part. The type
/// gate and UTF-8 decode run before analysis.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut upload: Option<(String, Option<String>, bytes::Bytes)> = None;
    let mut user_id: Option<Uuid> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let part_name = field.name().map(|n| n.to_string());
        match part_name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("resume.txt").to_string();
                let content_type = field.content_type().map(|ct| ct.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                upload = Some((file_name, content_type, data));
            }
            Some("user_id") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read user_id: {e}")))?;
                user_id = Some(
                    raw.parse()
                        .map_err(|_| AppError::Validation(format!("Invalid user_id: {raw}")))?,
                );
            }
            // Unknown parts are skipped, not rejected.
            _ => {}
        }
    }

    let (file_name, content_type, data) =
        upload.ok_or_else(|| AppError::Validation("Missing file part".to_string()))?;

    if !is_supported_upload(&file_name, content_type.as_deref()) {
        return Err(AppError::Validation(
            "Please upload a valid resume file (.txt, .pdf, or .docx)".to_string(),
        ));
    }

    let content = decode_text(&data)?;
    run_analysis(&state, content, file_name, user_id).await
}

/// POST /api/v1/analyses/text
///
/// JSON body with already-decoded resume text. Empty content is valid input;
/// the analyzer produces its floor scores for it.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let file_name = request
        .file_name
        .unwrap_or_else(|| "untitled.txt".to_string());
    run_analysis(&state, request.content, file_name, request.user_id).await
}

/// GET /api/v1/analyses?user_id=...
///
/// Lists a user's stored analyses, newest first, without the raw text.
pub async fn handle_list_analyses(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ResumeSummary>>, AppError> {
    let summaries = sqlx::query_as::<_, ResumeSummary>(
        "SELECT id, file_name, ats_score, created_at FROM resumes \
         WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(summaries))
}

/// GET /api/v1/analyses/:id?user_id=...
///
/// Returns one stored analysis, scoped to its owner.
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeRow>, AppError> {
    let row =
        sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(params.user_id)
            .fetch_optional(&state.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))?;

    Ok(Json(row))
}

// ────────────────────────────────────────────────────────────────────────────
// Shared pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Analyze-then-persist pipeline behind both analyze endpoints.
async fn run_analysis(
    state: &AppState,
    content: String,
    file_name: String,
    user_id: Option<Uuid>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let report = analyze_resume(&content);

    let analysis_data = serde_json::to_value(&report)
        .map_err(|e| AppError::Analysis(format!("Could not serialize report: {e}")))?;

    let resume_id = match user_id {
        Some(user_id) => {
            let record = NewAnalysisRecord {
                user_id,
                file_name: &file_name,
                file_content: &content,
                ats_score: report.scores.overall as i16,
                analysis_data: &analysis_data,
            };
            match state.store.save(record).await {
                Ok(id) => Some(id),
                // A failed insert never blocks the analysis result.
                Err(e) => {
                    tracing::error!("Failed to store analysis for user {user_id}: {e}");
                    None
                }
            }
        }
        None => None,
    };

    Ok(Json(AnalyzeResponse {
        resume_id,
        file_name,
        rating: rating(report.scores.overall),
        analysis: report,
    }))
}
