//! Supported content languages

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A language that localized record text can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ru,
    En,
    Tr,
    Fr,
    De,
    Ar,
    Gr,
}

impl Language {
    /// All supported languages in display order
    pub const ALL: [Language; 7] = [
        Language::Ru,
        Language::En,
        Language::Tr,
        Language::Fr,
        Language::De,
        Language::Ar,
        Language::Gr,
    ];

    /// Language that receives plain (non-localized) text
    pub const PRIMARY: Language = Language::Ru;

    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
            Language::Tr => "tr",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Ar => "ar",
            Language::Gr => "gr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Name of the language in the language itself
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Ru => "Русский",
            Language::En => "English",
            Language::Tr => "Türkçe",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::Ar => "العربية",
            Language::Gr => "Ελληνικά",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::Ru => "🇷🇺",
            Language::En => "🇺🇸",
            Language::Tr => "🇹🇷",
            Language::Fr => "🇫🇷",
            Language::De => "🇩🇪",
            Language::Ar => "🇸🇦",
            Language::Gr => "🇬🇷",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    /// Position of the language in [`Language::ALL`]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::PRIMARY
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unsupported language code: {}", s))
    }
}
