//! HTTP surface: request validation, handlers and the OpenAPI document.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::analyzer::{AnalysisOptions, AnalysisReport, TextAnalyzer};
use crate::emotion::{Emotion, EmotionResult};
use crate::indicators::{IndicatorSet, TemporalFocus};
use crate::motivation::{DailyMotivation, EmergencySupport, MotivationPackage};
use crate::mood::{Mood, MoodAnalysis, MoodCategory, MoodVerdict};
use crate::registry::ModelAvailability;
use crate::sentiment::{SentimentLabel, SentimentResult, SignalSource};
use crate::summarizer::{SummaryMethod, SummaryMode, SummaryResult, DEFAULT_SENTENCES};

pub const MAX_ANALYSIS_CHARS: usize = 10_000;
pub const MAX_MOOD_CHARS: usize = 5_000;
pub const MAX_SUMMARY_SENTENCES: usize = 10;

pub struct AppState {
    pub analyzer: TextAnalyzer,
    pub models: ModelAvailability,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
        };
        let body = ErrorBody {
            error: kind.to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

fn default_true() -> bool {
    true
}

fn default_sentences() -> usize {
    DEFAULT_SENTENCES
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TextAnalysisRequest {
    /// 1 to 10,000 characters.
    pub text: String,
    #[serde(default = "default_true")]
    pub include_summary: bool,
    #[serde(default = "default_true")]
    pub include_mood: bool,
    #[serde(default = "default_true")]
    pub include_motivation: bool,
    #[serde(default)]
    pub summary_type: SummaryMode,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SummaryRequest {
    pub text: String,
    #[serde(default)]
    pub summary_type: SummaryMode,
    /// Sentences in an extractive summary, 1 to 10.
    #[serde(default = "default_sentences")]
    pub num_sentences: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MoodRequest {
    /// 1 to 5,000 characters.
    pub text: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MotivationRequest {
    pub mood: String,
    pub mood_category: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub status: String,
    pub endpoints: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DailyMotivationResponse {
    #[serde(flatten)]
    pub daily: DailyMotivation,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentInfo {
    pub description: String,
    pub capabilities: Vec<String>,
    /// Mood labels the component can produce or accept.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub moods: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModelsInfo {
    pub summarizer: ComponentInfo,
    pub mood_detector: ComponentInfo,
    pub motivator: ComponentInfo,
    /// Learned models wired in at startup. Anything missing runs on its fallback.
    pub availability: ModelAvailability,
    pub max_input_chars: usize,
}

fn validate_text(text: &str, max_chars: usize) -> Result<(), ApiError> {
    let chars = text.chars().count();
    if chars == 0 {
        return Err(ApiError::Validation("text must not be empty".to_string()));
    }
    if chars > max_chars {
        return Err(ApiError::Validation(format!(
            "text is {} characters; the limit is {}",
            chars, max_chars
        )));
    }
    Ok(())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = RootResponse)),
    tag = "service"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Mood Lens text analysis & motivation API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "active".to_string(),
        endpoints: strings(&[
            "/docs - API documentation",
            "/analyze - Comprehensive text analysis",
            "/summarize - Text summarization only",
            "/mood - Mood detection only",
            "/motivate - Motivational content generation",
            "/daily-motivation - Daily motivational content",
            "/emergency-support - Crisis resources",
            "/models/info - Model capabilities and availability",
        ]),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "service"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "API is running successfully".to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/analyze",
    request_body = TextAnalysisRequest,
    responses(
        (status = 200, description = "Summary, mood and motivation", body = AnalysisReport),
        (status = 422, description = "Invalid input", body = ErrorBody)
    ),
    tag = "analysis"
)]
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TextAnalysisRequest>,
) -> Result<Json<AnalysisReport>, ApiError> {
    validate_text(&payload.text, MAX_ANALYSIS_CHARS)?;
    let options = AnalysisOptions {
        include_summary: payload.include_summary,
        include_mood: payload.include_mood,
        include_motivation: payload.include_motivation,
        summary_type: payload.summary_type,
    };
    Ok(Json(state.analyzer.analyze(&payload.text, options).await))
}

#[utoipa::path(
    post,
    path = "/summarize",
    request_body = SummaryRequest,
    responses(
        (status = 200, description = "Summary with key phrases", body = SummaryResult),
        (status = 422, description = "Invalid input", body = ErrorBody)
    ),
    tag = "analysis"
)]
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SummaryRequest>,
) -> Result<Json<SummaryResult>, ApiError> {
    validate_text(&payload.text, MAX_ANALYSIS_CHARS)?;
    if !(1..=MAX_SUMMARY_SENTENCES).contains(&payload.num_sentences) {
        return Err(ApiError::Validation(format!(
            "num_sentences must be between 1 and {}",
            MAX_SUMMARY_SENTENCES
        )));
    }
    let result = state
        .analyzer
        .summarizer()
        .summarize(&payload.text, payload.summary_type, payload.num_sentences)
        .await;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/mood",
    request_body = MoodRequest,
    responses(
        (status = 200, description = "Mood verdict with the signals behind it", body = MoodAnalysis),
        (status = 422, description = "Invalid input", body = ErrorBody)
    ),
    tag = "analysis"
)]
pub async fn mood(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MoodRequest>,
) -> Result<Json<MoodAnalysis>, ApiError> {
    validate_text(&payload.text, MAX_MOOD_CHARS)?;
    Ok(Json(state.analyzer.mood().analyze(&payload.text).await))
}

#[utoipa::path(
    post,
    path = "/motivate",
    request_body = MotivationRequest,
    responses((status = 200, description = "Motivational content for the mood", body = MotivationPackage)),
    tag = "motivation"
)]
pub async fn motivate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MotivationRequest>,
) -> Json<MotivationPackage> {
    debug!(mood = %payload.mood, category = ?payload.mood_category, "motivation requested");
    Json(state.analyzer.motivate(&payload.mood))
}

#[utoipa::path(
    get,
    path = "/daily-motivation",
    responses((status = 200, description = "Quote, affirmation and tip of the day", body = DailyMotivationResponse)),
    tag = "motivation"
)]
pub async fn daily_motivation(State(state): State<Arc<AppState>>) -> Json<DailyMotivationResponse> {
    let daily = state.analyzer.library().daily(&mut rand::thread_rng());
    Json(DailyMotivationResponse {
        daily,
        message: "Daily dose of motivation delivered!".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/emergency-support",
    responses((status = 200, description = "Crisis resources", body = EmergencySupport)),
    tag = "motivation"
)]
pub async fn emergency_support(State(state): State<Arc<AppState>>) -> Json<EmergencySupport> {
    Json(state.analyzer.library().emergency_support())
}

#[utoipa::path(
    get,
    path = "/models/info",
    responses((status = 200, description = "Capabilities and model availability", body = ModelsInfo)),
    tag = "service"
)]
pub async fn models_info(State(state): State<Arc<AppState>>) -> Json<ModelsInfo> {
    let moods: Vec<String> = Mood::ALL.iter().map(|m| m.as_str().to_string()).collect();
    Json(ModelsInfo {
        summarizer: ComponentInfo {
            description: "Text summarization using extractive and abstractive methods".to_string(),
            capabilities: strings(&["extractive", "abstractive", "auto", "key_phrases"]),
            moods: Vec::new(),
        },
        mood_detector: ComponentInfo {
            description: "Mood and sentiment analysis with keyword fallbacks".to_string(),
            capabilities: strings(&["sentiment", "emotions", "mood_indicators", "suggestions"]),
            moods: moods.clone(),
        },
        motivator: ComponentInfo {
            description: "Mood-based motivational content".to_string(),
            capabilities: strings(&["mood_based_quotes", "affirmations", "coping_strategies", "daily_motivation"]),
            moods,
        },
        availability: state.models,
        max_input_chars: MAX_ANALYSIS_CHARS,
    })
}

#[derive(OpenApi)]
#[openapi(
    paths(
        root,
        health,
        analyze,
        summarize,
        mood,
        motivate,
        daily_motivation,
        emergency_support,
        models_info
    ),
    components(
        schemas(
            TextAnalysisRequest,
            SummaryRequest,
            MoodRequest,
            MotivationRequest,
            RootResponse,
            HealthResponse,
            DailyMotivationResponse,
            ComponentInfo,
            ModelsInfo,
            ErrorBody,
            AnalysisReport,
            SummaryResult,
            SummaryMode,
            SummaryMethod,
            MoodAnalysis,
            MoodVerdict,
            Mood,
            MoodCategory,
            SentimentResult,
            SentimentLabel,
            SignalSource,
            EmotionResult,
            Emotion,
            IndicatorSet,
            TemporalFocus,
            MotivationPackage,
            DailyMotivation,
            EmergencySupport,
            ModelAvailability
        )
    ),
    tags(
        (name = "analysis", description = "Summarization and mood detection"),
        (name = "motivation", description = "Mood-conditioned content"),
        (name = "service", description = "Service metadata")
    )
)]
pub struct ApiDoc;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(root))
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/summarize", post(summarize))
        .route("/mood", post(mood))
        .route("/motivate", post(motivate))
        .route("/daily-motivation", get(daily_motivation))
        .route("/emergency-support", get(emergency_support))
        .route("/models/info", get(models_info))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
