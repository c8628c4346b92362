//! Test data helpers
//!
//! JSON records shaped the way the achievements API returns them.

use serde_json::{json, Value};

pub fn category_json(id: u64, key: &str, name_ru: &str) -> Value {
    json!({
        "id": id,
        "key": key,
        "name": {"ru": name_ru, "en": "", "tr": "", "fr": "", "de": "", "ar": "", "gr": ""},
        "createdAt": "2024-01-10T12:00:00.000Z"
    })
}

pub fn achievement_json(id: &str, title_ru: &str, category_id: Option<u64>) -> Value {
    json!({
        "id": id,
        "title": {"ru": title_ru, "en": format!("{} (en)", title_ru)},
        "description": {"ru": "Описание"},
        "categoryId": category_id,
        "icon": "trophy",
        "hidden": false,
        "target": 10
    })
}

pub fn reward_json(id: u64, reward_type: &str, achievement_id: Option<&str>) -> Value {
    json!({
        "id": id,
        "type": reward_type,
        "title": {"ru": "Награда"},
        "description": "Устаревшее описание",
        "icon": "gift",
        "isApplicable": true,
        "details": {"amount": 100, "currency": "USD"},
        "achievementId": achievement_id
    })
}

pub fn progress_json(id: u64, user_id: u64, achievement_id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "userId": user_id,
        "achievementId": achievement_id,
        "progress": status,
        "currentStep": 2,
        "createdAt": "2024-02-01T09:30:00.000Z"
    })
}

pub fn stats_json() -> Value {
    json!({
        "categories": 3,
        "achievements": 12,
        "rewards": 7,
        "progress": 40,
        "progressStats": {"completed": 15, "inProgress": 20, "blocked": 5},
        "achievementStats": {"hidden": 2, "visible": 10},
        "rewardStats": {"applicable": 6, "total": 7}
    })
}
