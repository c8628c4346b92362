//! Internationalization module
//!
//! Records managed by the console carry text in seven languages. This module
//! defines the supported languages, the always-complete [`LocalizedText`]
//! value with its normalizer, and the tabbed editor widget used by every
//! form that edits localized text.

pub mod editor;
pub mod languages;
pub mod localized;

// Re-export commonly used i18n components
pub use editor::{Completion, LanguageStatus, TranslationEditor};
pub use languages::Language;
pub use localized::{normalize, LocalizedText};
