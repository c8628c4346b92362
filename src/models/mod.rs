//! Data models module
//!
//! Records owned by the achievements API, as far as the console reads and
//! writes them. Deserialization is tolerant: missing or `null` fields take
//! their defaults and localized text is normalized.

pub mod achievement;
pub mod category;
pub mod progress;
pub mod record_id;
pub mod reward;
pub mod stats;

// Re-export commonly used models
pub use achievement::{Achievement, AchievementPayload};
pub use category::{Category, CategoryPayload};
pub use progress::{ProgressPayload, ProgressRecord, ProgressStatus};
pub use record_id::RecordId;
pub use reward::{Reward, RewardDetails, RewardPayload, RewardType};
pub use stats::{AchievementStats, DashboardStats, ProgressStats, RewardStats};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// A record that lives under a REST collection
pub trait ApiRecord {
    fn id(&self) -> &RecordId;
}

/// Deserialize a field, reading `null` as the type's default
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an RFC 3339 timestamp, reading anything unparseable as absent
pub(crate) fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(|value| value.as_str())
        .and_then(|text| DateTime::parse_from_rfc3339(text).ok())
        .map(|timestamp| timestamp.with_timezone(&Utc)))
}
