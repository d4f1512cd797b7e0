//! API handlers for the analysis server
//!
//! Provides REST endpoints for:
//! - Contract analysis of an uploaded file name
//! - Template listing
//! - Plain-text report download

use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use analysis_engine::session::{PROGRESS_STEP, PROGRESS_TICK_MS};
use analysis_engine::{
    render_report, report_file_name, templates, AnalysisEngine, DroppedFile, Phase, RiskOverview,
    SessionEvent, SessionState,
};
use shared_types::{AnalysisResult, ContractKind, RiskLevel};

use crate::error::ServerError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "analysis-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Template list response
#[derive(Serialize)]
pub struct TemplateListResponse {
    pub success: bool,
    pub templates: Vec<TemplateInfo>,
    pub count: usize,
}

/// Template metadata
#[derive(Serialize)]
pub struct TemplateInfo {
    pub kind: ContractKind,
    pub label: String,
    /// Position in the keyword matching order, starting at 1
    pub priority: usize,
    pub keywords: Vec<String>,
    pub clause_count: usize,
    pub risk_score: RiskLevel,
}

/// Handler: GET /api/templates
pub async fn handle_list_templates() -> Json<TemplateListResponse> {
    let templates: Vec<TemplateInfo> = templates()
        .iter()
        .enumerate()
        .map(|(index, t)| TemplateInfo {
            kind: t.kind,
            label: t.kind.label().to_string(),
            priority: index + 1,
            keywords: t.keywords.iter().map(|k| k.to_string()).collect(),
            clause_count: t.clauses.len(),
            risk_score: t.risk_score,
        })
        .collect();

    let count = templates.len();

    Json(TemplateListResponse {
        success: true,
        templates,
        count,
    })
}

/// Analyze request body
#[derive(Deserialize)]
pub struct AnalyzeRequest {
    /// Display name of the uploaded file, e.g. "lease_agreement.docx".
    /// Missing or null means no file was selected.
    #[serde(default)]
    pub file_name: Option<String>,

    /// Declared media type. Used to accept or reject the upload, never to
    /// pick the template.
    #[serde(default)]
    pub media_type: Option<String>,
}

/// Analyze response
#[derive(Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: AnalysisResult,
    pub overview: RiskOverview,
}

/// Handler: POST /api/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ServerError> {
    let Json(req) = payload?;
    let file_name = req.file_name.unwrap_or_default();
    let media_type = req.media_type.unwrap_or_default();
    info!(
        "Analyze request: file={}, media_type={}",
        file_name, media_type
    );

    let file = DroppedFile::new(file_name, media_type);
    let mut session = SessionState::default().update(SessionEvent::FileDropped(Some(file)));

    let file_name = match &session.phase {
        Phase::Analyzing { file, .. } => file.name.clone(),
        Phase::Rejected { error, .. } => return Err(error.clone().into()),
        _ => return Err(ServerError::NoFileSelected),
    };

    // Simulated processing time: upload ticks first, then the clause stage
    let (ticks, settle_ms) = pacing(state.analysis_delay_ms);
    for _ in 0..ticks {
        tokio::time::sleep(Duration::from_millis(PROGRESS_TICK_MS)).await;
        session = session.update(SessionEvent::ProgressTick);
        debug!("Upload progress for {}: {}%", file_name, session.progress());
    }
    if settle_ms > 0 {
        tokio::time::sleep(Duration::from_millis(settle_ms)).await;
    }

    let analysis = AnalysisEngine::new().analyze(&file_name);
    let session = session.update(SessionEvent::AnalysisFinished(analysis));

    let analysis = session
        .result()
        .cloned()
        .ok_or_else(|| ServerError::Internal("Analysis finished without a result".into()))?;
    let overview = RiskOverview::from_result(&analysis);

    info!(
        "Analysis complete: file={}, type={}, risk={}",
        analysis.file_name, analysis.contract_type, analysis.overall_risk_score
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis,
        overview,
    }))
}

/// Handler: POST /api/report
///
/// Takes a previously returned analysis and renders it as a text attachment.
pub async fn handle_report(
    payload: Result<Json<AnalysisResult>, JsonRejection>,
) -> Result<([(header::HeaderName, String); 2], String), ServerError> {
    let Json(analysis) = payload?;
    info!("Report request: file={}", analysis.file_name);

    if analysis.clauses.is_empty() {
        return Err(ServerError::InvalidRequest(
            "Analysis must contain at least one clause".to_string(),
        ));
    }

    let report = render_report(&analysis, chrono::Utc::now().date_naive());
    let download_name = header_safe(&report_file_name(&analysis.file_name));

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", download_name),
            ),
        ],
        report,
    ))
}

/// Split an analysis delay into progress ticks and the remaining wait.
///
/// Ticks run every `PROGRESS_TICK_MS` until progress would reach 100, as long
/// as the delay covers them; whatever is left is spent after the last tick.
fn pacing(delay_ms: u64) -> (u64, u64) {
    let ticks = u64::from(100 / PROGRESS_STEP).min(delay_ms / PROGRESS_TICK_MS);
    (ticks, delay_ms - ticks * PROGRESS_TICK_MS)
}

/// Restrict a download name to characters that are safe in a quoted header
fn header_safe(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
