//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring the router to an in-memory progress store
//! - A fixed clock so due dates and streaks are deterministic
//! - Helper functions for creating test data

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;
use chrono::NaiveDate;

use quizdrill_backend::config::Config;
use quizdrill_backend::store::ProgressStore;
use quizdrill_backend::{build_router, AppState};
use quizdrill_core::{FixedClock, NewCardLimit, Progress};

/// Test context containing application state and router.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Create a context with an empty history.
    pub fn new() -> Self {
        Self::with_progress(Progress::default())
    }

    /// Create a context seeded with `progress`.
    pub fn with_progress(progress: Progress) -> Self {
        let config = Config::from_lookup(|_| None).expect("default config");
        Self::with_config(config, progress)
    }

    /// Create a context with a configured new-card cap.
    pub fn with_new_card_limit(limit: NewCardLimit) -> Self {
        let mut config = Config::from_lookup(|_| None).expect("default config");
        config.max_new_cards = limit;
        Self::with_config(config, Progress::default())
    }

    fn with_config(config: Config, progress: Progress) -> Self {
        let state = AppState::new(
            config,
            ProgressStore::in_memory(progress),
            fixtures::question_bank(),
        )
        .with_clock(FixedClock::on(Self::today()));

        let app = build_router(state.clone());
        Self { state, app }
    }

    /// The date every request sees.
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }

    /// Current stored history.
    pub fn progress(&self) -> Progress {
        self.state.store.load()
    }
}
