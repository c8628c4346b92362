//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, Utc};

/// Format a timestamp for logs and health reports
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Format a date the way the console displays it (`dd.mm.yyyy`)
pub fn format_date(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(timestamp) => timestamp.format("%d.%m.%Y").to_string(),
        None => "Не указано".to_string(),
    }
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Check whether an icon value is an image URL served from an allowed domain
pub fn is_allowed_image_url(value: &str, allowed_domains: &[String]) -> bool {
    let Ok(url) = url::Url::parse(value) else {
        return false;
    };

    if url.scheme() != "https" && url.scheme() != "http" {
        return false;
    }

    url.host_str()
        .map(|host| allowed_domains.iter().any(|domain| domain.eq_ignore_ascii_case(host)))
        .unwrap_or(false)
}

/// Percent-encode a path segment
pub fn encode_path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
