//! Dashboard page state

use super::page::LoadPhase;
use crate::models::DashboardStats;
use crate::services::ApiClient;
use crate::utils::errors::AdminError;
use crate::utils::logging;

/// Message shown when statistics cannot be fetched
pub const STATS_ERROR: &str = "Не удалось загрузить статистику";

/// Read-only statistics view
pub struct DashboardPage {
    api: ApiClient,
    pub phase: LoadPhase,
    pub stats: DashboardStats,
    pub error: Option<String>,
}

impl DashboardPage {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            phase: LoadPhase::Loading,
            stats: DashboardStats::default(),
            error: None,
        }
    }

    /// Fetch statistics; on failure every count reads as zero
    pub async fn load(&mut self) {
        self.phase = LoadPhase::Loading;
        self.error = None;

        match self.api.stats().await {
            Ok(stats) => {
                self.stats = stats;
                self.phase = LoadPhase::Ready;
            }
            Err(error) => {
                logging::log_page_failure("dashboard", "load", &AdminError::Api(error));
                self.stats = DashboardStats::default();
                self.error = Some(STATS_ERROR.to_string());
                self.phase = LoadPhase::Failed;
            }
        }
    }
}
