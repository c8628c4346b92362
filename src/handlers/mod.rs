//! HTTP handlers module
//!
//! This module wires the served routes:
//! - the dashboard at `/`
//! - one CRUD page per managed collection
//! - the health endpoint at `/api/health`

pub mod dashboard;
pub mod health;
pub mod resource;

use std::sync::Arc;
use std::time::Instant;

use axum::routing::get;
use axum::Router;

use crate::config::Settings;
use crate::middleware;
use crate::services::ApiClient;
use crate::state::{Achievements, Categories, Progress, Rewards};
use crate::utils::errors::Result;

pub use resource::PageQuery;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub settings: Arc<Settings>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self> {
        let api = ApiClient::new(&settings.api)?;
        Ok(Self {
            api,
            settings: Arc::new(settings),
            started_at: Instant::now(),
        })
    }
}

/// Build the application router with its middleware
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(dashboard::show))
        .route("/api/health", get(health::check))
        .merge(resource::routes::<Categories>())
        .merge(resource::routes::<Achievements>())
        .merge(resource::routes::<Rewards>())
        .merge(resource::routes::<Progress>())
        .layer(axum::middleware::from_fn(middleware::logging::log_requests));

    middleware::security::with_security_headers(routes).with_state(state)
}
