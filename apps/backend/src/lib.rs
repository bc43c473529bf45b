pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use quizdrill_core::{Clock, QuestionBank, Sm2, SpacedRepetitionAlgorithm, SystemClock};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::ApiError;
use crate::store::ProgressStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProgressStore>,
    pub bank: Arc<QuestionBank>,
    pub algorithm: Arc<dyn SpacedRepetitionAlgorithm>,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, store: ProgressStore, bank: QuestionBank) -> Self {
        Self {
            store: Arc::new(store),
            bank: Arc::new(bank),
            algorithm: Arc::new(Sm2::default()),
            clock: Arc::new(SystemClock),
            config: Arc::new(config),
        }
    }

    /// Replace the clock, e.g. with a fixed one.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}

pub fn load_question_bank(config: &Config) -> Result<QuestionBank, ApiError> {
    let text = std::fs::read_to_string(&config.questions_path).map_err(|e| {
        ApiError::Config(format!(
            "cannot read question bank {}: {}",
            config.questions_path.display(),
            e
        ))
    })?;
    Ok(QuestionBank::from_json(&text)?)
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Question routes
        .route("/api/questions", get(routes::questions::list))
        .route("/api/questions/{id}", get(routes::questions::get))
        // Study routes
        .route("/api/study/queue", get(routes::study::queue))
        .route("/api/study/answer", post(routes::study::answer))
        // Stats routes
        .route("/api/stats", get(routes::stats::summary))
        // Progress routes
        .route("/api/progress/export", get(routes::progress::export))
        .route("/api/progress/import", post(routes::progress::import))
        .route(
            "/api/progress/sequential/{day}",
            get(routes::progress::get_sequential).put(routes::progress::set_sequential),
        );

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes)
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Loading questions from {}...", config.questions_path.display());
    let bank = load_question_bank(&config)?;
    tracing::info!("Loaded {} questions", bank.questions.len());

    tracing::info!("Opening progress store at {}...", config.progress_path.display());
    let store = ProgressStore::open(&config.progress_path)?;

    let addr = config.addr();
    let state = AppState::new(config, store, bank);

    let app = build_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
