//! User progress model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::record_id::deserialize_optional;
use super::{lenient_timestamp, null_as_default, ApiRecord, RecordId};

/// State of a user's progress towards an achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProgressStatus {
    #[default]
    InProgress,
    Blocked,
    Finished,
}

impl ProgressStatus {
    pub const ALL: [ProgressStatus; 3] = [
        ProgressStatus::InProgress,
        ProgressStatus::Blocked,
        ProgressStatus::Finished,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ProgressStatus::InProgress => "INPROGRESS",
            ProgressStatus::Blocked => "BLOCKED",
            ProgressStatus::Finished => "FINISHED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProgressStatus::InProgress => "В процессе",
            ProgressStatus::Blocked => "Заблокировано",
            ProgressStatus::Finished => "Завершено",
        }
    }

    /// CSS class of the status badge
    pub fn badge_class(self) -> &'static str {
        match self {
            ProgressStatus::InProgress => "badge badge-yellow",
            ProgressStatus::Blocked => "badge badge-red",
            ProgressStatus::Finished => "badge badge-green",
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ProgressStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| format!("Unknown progress status: {}", s))
    }
}

impl<'de> Deserialize<'de> for ProgressStatus {
    /// Unknown or missing statuses read as [`ProgressStatus::InProgress`]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|code| code.parse().ok()).unwrap_or_default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub id: RecordId,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub user_id: Option<RecordId>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub achievement_id: Option<RecordId>,
    #[serde(default)]
    pub progress: ProgressStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_step: i64,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPayload {
    pub user_id: RecordId,
    pub achievement_id: RecordId,
    pub progress: ProgressStatus,
    pub current_step: i64,
}

impl ApiRecord for ProgressRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_codes() {
        assert_eq!(serde_json::to_value(ProgressStatus::InProgress).unwrap(), json!("INPROGRESS"));
        assert_eq!("FINISHED".parse::<ProgressStatus>(), Ok(ProgressStatus::Finished));
        assert!("DONE".parse::<ProgressStatus>().is_err());
    }

    #[test]
    fn test_unknown_status_reads_as_in_progress() {
        let record: ProgressRecord = serde_json::from_value(json!({
            "id": 1,
            "userId": 12345,
            "achievementId": "a1",
            "progress": "ARCHIVED",
            "currentStep": null
        }))
        .unwrap();

        assert_eq!(record.progress, ProgressStatus::InProgress);
        assert_eq!(record.user_id, Some(RecordId::new("12345")));
        assert_eq!(record.current_step, 0);
    }

    #[test]
    fn test_blocked_status() {
        let record: ProgressRecord = serde_json::from_value(json!({
            "id": 2,
            "progress": "BLOCKED",
            "currentStep": 4
        }))
        .unwrap();
        assert_eq!(record.progress, ProgressStatus::Blocked);
        assert_eq!(record.progress.label(), "Заблокировано");
        assert_eq!(record.current_step, 4);
    }
}
