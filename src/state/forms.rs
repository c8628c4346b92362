//! Typed forms of the resource pages
//!
//! A form is filled either from a stored record (edit) or from a submitted
//! body, and converts itself into the payload sent to the API. Conversion is
//! the only place input is validated.

use serde_json::Value;

use crate::i18n::{Language, LocalizedText, TranslationEditor};
use crate::models::{
    Achievement, AchievementPayload, Category, CategoryPayload, ProgressPayload, ProgressRecord,
    ProgressStatus, RecordId, Reward, RewardDetails, RewardPayload, RewardType,
};
use crate::utils::errors::FormError;
use crate::utils::form_fields::FormFields;

/// A form bound to one resource
pub trait ResourceForm: Default + Clone + Send {
    type Record;
    type Payload: serde::Serialize + Send + Sync;

    /// Form populated from a stored record
    fn from_record(record: &Self::Record) -> Self;

    /// Form populated from a submitted body
    fn from_fields(fields: &FormFields) -> Self;

    /// Convert into the outgoing payload, rejecting invalid input
    fn to_payload(&self) -> Result<Self::Payload, FormError>;
}

/// Localized text of a form together with the tab the user was on
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalizedField {
    pub value: LocalizedText,
    pub tab: Language,
}

impl LocalizedField {
    pub fn new(value: LocalizedText) -> Self {
        Self {
            value,
            tab: Language::PRIMARY,
        }
    }

    /// Read the field `name` of a submission through the editor widget
    pub fn read(fields: &FormFields, name: &str) -> Self {
        let mut value = LocalizedText::new();
        let mut editor = TranslationEditor::new(name, "", LocalizedText::new(), |next| value = next);
        editor.read_submission(fields);
        let tab = editor.active_tab();
        Self { value, tab }
    }

    /// Editor widget showing this field
    pub fn editor(&self, name: &str, label: &str) -> TranslationEditor {
        let mut editor = TranslationEditor::display(name, label, &self.value);
        editor.select_tab(self.tab);
        editor
    }
}

fn optional_id(text: &str) -> Option<RecordId> {
    let text = text.trim();
    (!text.is_empty()).then(|| RecordId::new(text))
}

fn required_id(text: &str, field: &'static str) -> Result<RecordId, FormError> {
    optional_id(text).ok_or(FormError::MissingField { field })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub key: String,
    pub name: LocalizedField,
}

impl ResourceForm for CategoryForm {
    type Record = Category;
    type Payload = CategoryPayload;

    fn from_record(record: &Category) -> Self {
        Self {
            key: record.key.clone(),
            name: LocalizedField::new(record.name.clone()),
        }
    }

    fn from_fields(fields: &FormFields) -> Self {
        Self {
            key: fields.text("key"),
            name: LocalizedField::read(fields, "name"),
        }
    }

    fn to_payload(&self) -> Result<CategoryPayload, FormError> {
        let key = self.key.trim();
        if key.is_empty() {
            return Err(FormError::MissingField { field: "key" });
        }

        Ok(CategoryPayload {
            key: key.to_string(),
            name: self.name.value.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AchievementForm {
    pub title: LocalizedField,
    pub description: LocalizedField,
    pub category_id: String,
    pub icon: String,
    pub hidden: bool,
    pub target: String,
}

impl AchievementForm {
    /// Parse the target field: blank is no target, anything else must be a number
    pub fn parse_target(text: &str) -> Result<Option<serde_json::Number>, FormError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<Value>(text) {
            Ok(Value::Number(number)) => Ok(Some(number)),
            _ => Err(FormError::InvalidNumber {
                field: "target",
                value: text.to_string(),
            }),
        }
    }
}

impl ResourceForm for AchievementForm {
    type Record = Achievement;
    type Payload = AchievementPayload;

    fn from_record(record: &Achievement) -> Self {
        Self {
            title: LocalizedField::new(record.title.clone()),
            description: LocalizedField::new(record.description.clone()),
            category_id: record
                .category_id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            icon: record.icon.clone().unwrap_or_default(),
            hidden: record.hidden,
            target: record
                .target
                .as_ref()
                .map(|target| target.to_string())
                .unwrap_or_default(),
        }
    }

    fn from_fields(fields: &FormFields) -> Self {
        Self {
            title: LocalizedField::read(fields, "title"),
            description: LocalizedField::read(fields, "description"),
            category_id: fields.text("categoryId"),
            icon: fields.text("icon"),
            hidden: fields.checked("hidden"),
            target: fields.text("target"),
        }
    }

    fn to_payload(&self) -> Result<AchievementPayload, FormError> {
        Ok(AchievementPayload {
            title: self.title.value.clone(),
            description: self.description.value.clone(),
            category_id: optional_id(&self.category_id),
            icon: self.icon.clone(),
            hidden: self.hidden,
            target: Self::parse_target(&self.target)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RewardForm {
    pub reward_type: String,
    pub title: LocalizedField,
    pub description: LocalizedField,
    pub achievement_id: String,
    pub icon: String,
    pub is_applicable: bool,
    pub details: String,
}

impl Default for RewardForm {
    fn default() -> Self {
        Self {
            reward_type: RewardType::default().code().to_string(),
            title: LocalizedField::default(),
            description: LocalizedField::default(),
            achievement_id: String::new(),
            icon: String::new(),
            is_applicable: false,
            details: String::new(),
        }
    }
}

impl ResourceForm for RewardForm {
    type Record = Reward;
    type Payload = RewardPayload;

    fn from_record(record: &Reward) -> Self {
        let reward_type = if record.reward_type.is_empty() {
            RewardType::default().code().to_string()
        } else {
            record.reward_type.clone()
        };

        Self {
            reward_type,
            title: LocalizedField::new(record.title.clone()),
            description: LocalizedField::new(record.description.clone()),
            achievement_id: record
                .achievement_id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            icon: record.icon.clone().unwrap_or_default(),
            is_applicable: record.is_applicable,
            details: RewardDetails::to_form_text(record.details.as_ref()),
        }
    }

    fn from_fields(fields: &FormFields) -> Self {
        let reward_type = fields
            .get("type")
            .filter(|code| !code.is_empty())
            .unwrap_or(RewardType::default().code())
            .to_string();

        Self {
            reward_type,
            title: LocalizedField::read(fields, "title"),
            description: LocalizedField::read(fields, "description"),
            achievement_id: fields.text("achievementId"),
            icon: fields.text("icon"),
            is_applicable: fields.checked("isApplicable"),
            details: fields.text("details"),
        }
    }

    fn to_payload(&self) -> Result<RewardPayload, FormError> {
        Ok(RewardPayload {
            reward_type: self.reward_type.clone(),
            title: self.title.value.clone(),
            description: self.description.value.clone(),
            icon: self.icon.clone(),
            is_applicable: self.is_applicable,
            details: RewardDetails::parse(&self.details)?,
            achievement_id: optional_id(&self.achievement_id),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressForm {
    pub user_id: String,
    pub achievement_id: String,
    pub progress: ProgressStatus,
    pub current_step: String,
}

impl Default for ProgressForm {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            achievement_id: String::new(),
            progress: ProgressStatus::default(),
            current_step: "0".to_string(),
        }
    }
}

impl ProgressForm {
    /// Parse the current step: blank is 0, anything else a non-negative integer
    pub fn parse_current_step(text: &str) -> Result<i64, FormError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(0);
        }

        text.parse::<i64>()
            .ok()
            .filter(|step| *step >= 0)
            .ok_or_else(|| FormError::InvalidNumber {
                field: "currentStep",
                value: text.to_string(),
            })
    }
}

impl ResourceForm for ProgressForm {
    type Record = ProgressRecord;
    type Payload = ProgressPayload;

    fn from_record(record: &ProgressRecord) -> Self {
        Self {
            user_id: record
                .user_id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            achievement_id: record
                .achievement_id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            progress: record.progress,
            current_step: record.current_step.to_string(),
        }
    }

    fn from_fields(fields: &FormFields) -> Self {
        Self {
            user_id: fields.text("userId"),
            achievement_id: fields.text("achievementId"),
            progress: fields
                .get("progress")
                .and_then(|code| code.parse().ok())
                .unwrap_or_default(),
            current_step: fields.text("currentStep"),
        }
    }

    fn to_payload(&self) -> Result<ProgressPayload, FormError> {
        Ok(ProgressPayload {
            user_id: required_id(&self.user_id, "userId")?,
            achievement_id: required_id(&self.achievement_id, "achievementId")?,
            progress: self.progress,
            current_step: Self::parse_current_step(&self.current_step)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_category_key_is_required() {
        let form = CategoryForm {
            key: "   ".to_string(),
            ..Default::default()
        };
        assert_matches!(form.to_payload(), Err(FormError::MissingField { field: "key" }));
    }

    #[test]
    fn test_category_from_fields_reads_translations() {
        let fields: FormFields = [
            ("key", "beginner"),
            ("name[ru]", "Новичок"),
            ("name[en]", "Beginner"),
            ("name[tab]", "en"),
        ]
        .into_iter()
        .collect();

        let form = CategoryForm::from_fields(&fields);
        assert_eq!(form.name.value.get(Language::Ru), "Новичок");
        assert_eq!(form.name.value.get(Language::En), "Beginner");
        assert_eq!(form.name.value.get(Language::De), "");
        assert_eq!(form.name.tab, Language::En);

        let payload = form.to_payload().unwrap();
        assert_eq!(payload.key, "beginner");
    }

    #[test]
    fn test_achievement_target_conversion() {
        assert_eq!(AchievementForm::parse_target("").unwrap(), None);
        assert_eq!(AchievementForm::parse_target("  ").unwrap(), None);
        assert_eq!(
            AchievementForm::parse_target("10").unwrap().and_then(|n| n.as_i64()),
            Some(10)
        );
        assert_eq!(
            AchievementForm::parse_target("2.5").unwrap().and_then(|n| n.as_f64()),
            Some(2.5)
        );
        assert_matches!(
            AchievementForm::parse_target("ten"),
            Err(FormError::InvalidNumber { field: "target", .. })
        );
    }

    #[test]
    fn test_achievement_payload_json() {
        let form = AchievementForm {
            target: "10".to_string(),
            hidden: true,
            ..Default::default()
        };
        let value = serde_json::to_value(form.to_payload().unwrap()).unwrap();
        assert_eq!(value["target"], json!(10));
        assert_eq!(value["categoryId"], Value::Null);
        assert_eq!(value["hidden"], true);
        assert_eq!(value["title"]["gr"], "");

        let empty = AchievementForm::default().to_payload().unwrap();
        assert_eq!(serde_json::to_value(empty).unwrap()["target"], Value::Null);
    }

    #[test]
    fn test_achievement_round_trips_record() {
        let record: Achievement = serde_json::from_value(json!({
            "id": 3,
            "title": "Legacy title",
            "categoryId": 7,
            "target": 25
        }))
        .unwrap();

        let form = AchievementForm::from_record(&record);
        assert_eq!(form.title.value.get(Language::Ru), "Legacy title");
        assert_eq!(form.category_id, "7");
        assert_eq!(form.target, "25");
        assert_eq!(form.icon, "");
    }

    #[test]
    fn test_reward_invalid_details_block_payload() {
        let form = RewardForm {
            details: "{not json".to_string(),
            ..Default::default()
        };
        assert_matches!(form.to_payload(), Err(FormError::InvalidDetails(_)));
    }

    #[test]
    fn test_reward_from_fields() {
        let fields: FormFields = [
            ("type", "bonus_crypto"),
            ("title[ru]", "Бонус"),
            ("achievementId", ""),
            ("isApplicable", "on"),
            ("details", r#"{"amount": 100}"#),
        ]
        .into_iter()
        .collect();

        let form = RewardForm::from_fields(&fields);
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.reward_type, "bonus_crypto");
        assert!(payload.is_applicable);
        assert_eq!(payload.achievement_id, None);
        assert_eq!(payload.details.unwrap().as_value(), &json!({"amount": 100}));
    }

    #[test]
    fn test_reward_defaults_to_badge() {
        let form = RewardForm::from_fields(&FormFields::default());
        assert_eq!(form.reward_type, "badge");
        assert!(!form.is_applicable);
    }

    #[test]
    fn test_progress_required_fields() {
        let form = ProgressForm {
            achievement_id: "a1".to_string(),
            ..Default::default()
        };
        assert_matches!(form.to_payload(), Err(FormError::MissingField { field: "userId" }));

        let form = ProgressForm {
            user_id: "42".to_string(),
            ..Default::default()
        };
        assert_matches!(
            form.to_payload(),
            Err(FormError::MissingField { field: "achievementId" })
        );
    }

    #[test]
    fn test_progress_current_step() {
        assert_eq!(ProgressForm::parse_current_step("").unwrap(), 0);
        assert_eq!(ProgressForm::parse_current_step("7").unwrap(), 7);
        assert_matches!(
            ProgressForm::parse_current_step("-1"),
            Err(FormError::InvalidNumber { field: "currentStep", .. })
        );
        assert_matches!(
            ProgressForm::parse_current_step("abc"),
            Err(FormError::InvalidNumber { .. })
        );
    }

    #[test]
    fn test_progress_from_fields() {
        let fields: FormFields = [
            ("userId", "12345"),
            ("achievementId", "a1"),
            ("progress", "FINISHED"),
            ("currentStep", "3"),
        ]
        .into_iter()
        .collect();

        let payload = ProgressForm::from_fields(&fields).to_payload().unwrap();
        assert_eq!(payload.user_id, RecordId::new("12345"));
        assert_eq!(payload.progress, ProgressStatus::Finished);
        assert_eq!(payload.current_step, 3);
    }
}
