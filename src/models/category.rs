//! Category model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{lenient_timestamp, null_as_default, ApiRecord, RecordId};
use crate::i18n::LocalizedText;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPayload {
    pub key: String,
    pub name: LocalizedText,
}

impl ApiRecord for Category {
    fn id(&self) -> &RecordId {
        &self.id
    }
}
