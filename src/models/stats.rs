//! Aggregate statistics shown on the dashboard

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub categories: u64,
    pub achievements: u64,
    pub rewards: u64,
    pub progress: u64,
    pub progress_stats: ProgressStats,
    pub achievement_stats: AchievementStats,
    pub reward_stats: RewardStats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressStats {
    pub completed: u64,
    pub in_progress: u64,
    pub blocked: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AchievementStats {
    pub hidden: u64,
    pub visible: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RewardStats {
    pub applicable: u64,
    pub total: u64,
}
