//! Localized record text and its normalizer
//!
//! Records coming from the API carry their titles, names and descriptions as
//! per-language objects, but older records may still hold plain strings or
//! partially filled objects. Everything passes through [`normalize`] so the
//! rest of the console only ever sees a complete [`LocalizedText`].

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::languages::Language;

/// Text in every supported language.
///
/// Every [`Language`] always has an entry, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct LocalizedText {
    entries: [String; 7],
}

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text holding a single value in the primary language
    pub fn primary_only(text: impl Into<String>) -> Self {
        Self::new().with(Language::PRIMARY, text)
    }

    pub fn get(&self, lang: Language) -> &str {
        &self.entries[lang.index()]
    }

    /// Copy of this text with one language replaced
    pub fn with(&self, lang: Language, text: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.entries[lang.index()] = text.into();
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> {
        Language::ALL.into_iter().map(move |lang| (lang, self.get(lang)))
    }

    /// Whether the language holds non-whitespace text
    pub fn is_filled(&self, lang: Language) -> bool {
        !self.get(lang).trim().is_empty()
    }

    pub fn filled_count(&self) -> usize {
        Language::ALL.iter().filter(|lang| self.is_filled(**lang)).count()
    }

    pub fn char_count(&self, lang: Language) -> usize {
        self.get(lang).chars().count()
    }

    /// Text shown in tables: the primary language, or `fallback` when it is empty
    pub fn display_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        let primary = self.get(Language::PRIMARY);
        if primary.is_empty() {
            fallback
        } else {
            primary
        }
    }
}

impl From<Value> for LocalizedText {
    fn from(value: Value) -> Self {
        normalize(&value)
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        Self::primary_only(text)
    }
}

impl Serialize for LocalizedText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Language::ALL.len()))?;
        for (lang, text) in self.iter() {
            map.serialize_entry(lang.code(), text)?;
        }
        map.end()
    }
}

/// Turn any JSON value into a complete [`LocalizedText`].
///
/// Objects keep their string entries for known languages; everything else
/// becomes empty. Any non-object value is stringified into the primary
/// language, with falsy values (`null`, `false`, `0`, `""`) giving an empty
/// string.
pub fn normalize(value: &Value) -> LocalizedText {
    match value {
        Value::Object(map) => {
            let mut text = LocalizedText::new();
            for lang in Language::ALL {
                if let Some(Value::String(entry)) = map.get(lang.code()) {
                    text.entries[lang.index()] = entry.clone();
                }
            }
            text
        }
        other => LocalizedText::primary_only(stringify_primitive(other)),
    }
}

fn stringify_primitive(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "true".to_string(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify_element).collect::<Vec<_>>().join(","),
        Value::Object(_) => String::new(),
    }
}

fn stringify_element(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify_element).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Text of a number as the API's JavaScript clients print it: integral
/// floats without a fraction, and exponents above 1e21 with a sign
fn number_text(number: &serde_json::Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }

    let Some(value) = number.as_f64() else {
        return number.to_string();
    };
    let magnitude = value.abs();
    if magnitude >= 1e21 {
        format!("{:e}", value).replacen('e', "e+", 1)
    } else if magnitude != 0.0 && magnitude < 1e-6 {
        format!("{:e}", value)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}
