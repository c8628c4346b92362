//! Achievement model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record_id::deserialize_optional;
use super::{lenient_timestamp, null_as_default, ApiRecord, RecordId};
use crate::i18n::LocalizedText;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: RecordId,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub category_id: Option<RecordId>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hidden: bool,
    #[serde(default)]
    pub target: Option<serde_json::Number>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementPayload {
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub category_id: Option<RecordId>,
    pub icon: String,
    pub hidden: bool,
    pub target: Option<serde_json::Number>,
}

impl ApiRecord for Achievement {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use serde_json::json;

    #[test]
    fn test_deserializes_full_record() {
        let achievement: Achievement = serde_json::from_value(json!({
            "id": "a1",
            "title": {"ru": "Первый шаг", "en": "First step"},
            "description": null,
            "categoryId": 2,
            "icon": "trophy",
            "hidden": true,
            "target": 10,
            "createdAt": "2024-05-01T10:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(achievement.title.get(Language::En), "First step");
        assert_eq!(achievement.description, LocalizedText::new());
        assert_eq!(achievement.category_id, Some(RecordId::new("2")));
        assert!(achievement.hidden);
        assert_eq!(achievement.target.unwrap().as_i64(), Some(10));
        assert!(achievement.created_at.is_some());
    }

    #[test]
    fn test_empty_category_reference_is_absent() {
        let achievement: Achievement = serde_json::from_value(json!({
            "id": 1,
            "categoryId": "",
            "hidden": null
        }))
        .unwrap();

        assert!(achievement.category_id.is_none());
        assert!(!achievement.hidden);
        assert!(achievement.target.is_none());
    }
}
