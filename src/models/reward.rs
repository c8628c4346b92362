//! Reward model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::record_id::deserialize_optional;
use super::{lenient_timestamp, null_as_default, ApiRecord, RecordId};
use crate::i18n::LocalizedText;
use crate::utils::errors::FormError;

/// Reward kinds offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewardType {
    #[default]
    Badge,
    BonusCrypto,
    DiscountCommission,
    CatAccessories,
    VisualEffects,
}

impl RewardType {
    pub const ALL: [RewardType; 5] = [
        RewardType::Badge,
        RewardType::BonusCrypto,
        RewardType::DiscountCommission,
        RewardType::CatAccessories,
        RewardType::VisualEffects,
    ];

    pub fn code(self) -> &'static str {
        match self {
            RewardType::Badge => "badge",
            RewardType::BonusCrypto => "bonus_crypto",
            RewardType::DiscountCommission => "discount_commission",
            RewardType::CatAccessories => "cat_accessories",
            RewardType::VisualEffects => "visual_effects",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RewardType::Badge => "Значок",
            RewardType::BonusCrypto => "Бонус криптовалюты",
            RewardType::DiscountCommission => "Скидка комиссии",
            RewardType::CatAccessories => "Аксессуары для кота",
            RewardType::VisualEffects => "Визуальные эффекты",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Label for a stored type code; unknown codes are shown as is
    pub fn label_for(code: &str) -> &str {
        Self::from_code(code).map(Self::label).unwrap_or(code)
    }
}

/// Free-form JSON attached to a reward, validated at the form boundary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RewardDetails(Value);

impl RewardDetails {
    /// Parse the text of the details field.
    ///
    /// An empty field means "no details"; anything else, whitespace
    /// included, must be valid JSON.
    pub fn parse(text: &str) -> Result<Option<Self>, FormError> {
        if text.is_empty() {
            return Ok(None);
        }

        serde_json::from_str(text)
            .map(|value| Some(Self(value)))
            .map_err(FormError::InvalidDetails)
    }

    /// Text shown in the details field when editing a stored value
    pub fn to_form_text(value: Option<&Value>) -> String {
        match value {
            None | Some(Value::Null) => String::new(),
            Some(value) => serde_json::to_string_pretty(value).unwrap_or_default(),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: RecordId,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub reward_type: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_applicable: bool,
    #[serde(default)]
    pub details: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub achievement_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardPayload {
    #[serde(rename = "type")]
    pub reward_type: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub icon: String,
    pub is_applicable: bool,
    pub details: Option<RewardDetails>,
    pub achievement_id: Option<RecordId>,
}

impl ApiRecord for Reward {
    fn id(&self) -> &RecordId {
        &self.id
    }
}
