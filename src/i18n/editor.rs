//! Multilingual text editor widget
//!
//! A controlled widget: the caller owns the [`LocalizedText`] and receives
//! every edit through the `on_change` callback. The widget itself only owns
//! which language tab is active.

use std::fmt;

use serde_json::Value;

use super::languages::Language;
use super::localized::{normalize, LocalizedText};
use crate::utils::form_fields::FormFields;
use crate::utils::helpers::escape_html;

/// How many languages of a text are filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub filled: usize,
    pub total: usize,
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} из {} языков", self.filled, self.total)
    }
}

/// Per-language indicator shown under each text area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageStatus {
    pub language: Language,
    pub chars: usize,
    pub filled: bool,
}

/// Tabbed editor for one localized field of a form
pub struct TranslationEditor<F = fn(LocalizedText)>
where
    F: FnMut(LocalizedText),
{
    name: String,
    label: String,
    active_tab: Language,
    value: LocalizedText,
    on_change: F,
}

impl TranslationEditor<fn(LocalizedText)> {
    /// Editor that is only rendered, never edited
    pub fn display(name: &str, label: &str, value: &LocalizedText) -> Self {
        fn ignore(_: LocalizedText) {}
        TranslationEditor::new(name, label, value.clone(), ignore as fn(LocalizedText))
    }
}

impl<F> TranslationEditor<F>
where
    F: FnMut(LocalizedText),
{
    pub fn new(name: &str, label: &str, value: LocalizedText, on_change: F) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            active_tab: Language::PRIMARY,
            value,
            on_change,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &LocalizedText {
        &self.value
    }

    pub fn active_tab(&self) -> Language {
        self.active_tab
    }

    /// Replace the displayed value with one supplied by the caller
    pub fn set_value(&mut self, value: LocalizedText) {
        self.value = value;
    }

    /// Replace the displayed value with raw data, normalizing it first
    pub fn set_raw_value(&mut self, raw: &Value) {
        self.value = normalize(raw);
    }

    /// Switch the visible language. Does not touch the value.
    pub fn select_tab(&mut self, lang: Language) {
        self.active_tab = lang;
    }

    /// Edit the text of the active language
    pub fn edit(&mut self, text: impl Into<String>) {
        let lang = self.active_tab;
        self.edit_language(lang, text);
    }

    /// Edit the text of one language and report the new value
    pub fn edit_language(&mut self, lang: Language, text: impl Into<String>) {
        let next = self.value.with(lang, text);
        (self.on_change)(next.clone());
        self.value = next;
    }

    pub fn completion(&self) -> Completion {
        Completion {
            filled: self.value.filled_count(),
            total: Language::ALL.len(),
        }
    }

    pub fn statuses(&self) -> Vec<LanguageStatus> {
        Language::ALL
            .into_iter()
            .map(|language| LanguageStatus {
                language,
                chars: self.value.char_count(language),
                filled: self.value.is_filled(language),
            })
            .collect()
    }

    fn field_name(&self, lang: Language) -> String {
        format!("{}[{}]", self.name, lang.code())
    }

    fn tab_field_name(&self) -> String {
        format!("{}[tab]", self.name)
    }

    /// Apply the editor's fields from a submitted form.
    ///
    /// Line breaks are read back as `\n`. Each language whose submitted text
    /// differs is emitted through `on_change`; languages missing from the
    /// submission keep their text.
    pub fn read_submission(&mut self, fields: &FormFields) {
        if let Some(lang) = fields.get(&self.tab_field_name()).and_then(Language::from_code) {
            self.select_tab(lang);
        }

        for lang in Language::ALL {
            if let Some(text) = fields.get(&self.field_name(lang)) {
                // Browsers submit textarea line breaks as CRLF
                let text = text.replace("\r\n", "\n");
                if text != self.value.get(lang) {
                    self.edit_language(lang, text);
                }
            }
        }
    }

    /// Render the editor as an HTML fragment for use inside a form
    pub fn render(&self) -> String {
        let mut html = String::new();
        html.push_str(&format!(
            r#"<div class="translation-editor" data-editor="{name}">
<div class="editor-label">{label}</div>
<div class="editor-tabs">"#,
            name = escape_html(&self.name),
            label = escape_html(&self.label),
        ));

        for lang in Language::ALL {
            let checked = if lang == self.active_tab { " checked" } else { "" };
            html.push_str(&format!(
                r#"<label class="editor-tab"><input type="radio" name="{tab_field}" value="{code}"{checked}><span>{flag} {native}</span></label>"#,
                tab_field = escape_html(&self.tab_field_name()),
                code = lang.code(),
                flag = lang.flag(),
                native = lang.native_name(),
            ));
        }
        html.push_str("</div>\n<div class=\"editor-panels\">");

        for status in self.statuses() {
            let lang = status.language;
            let hidden = if lang == self.active_tab { "" } else { " hidden" };
            let dir = if lang.is_rtl() { " dir=\"rtl\"" } else { "" };
            let filled_mark = if status.filled { "" } else { " hidden" };
            html.push_str(&format!(
                r#"<div class="editor-panel" data-lang="{code}"{hidden}>
<div class="editor-panel-title">🌐 {native}</div>
<textarea name="{field}" rows="3"{dir} placeholder="Введите текст на {native_lower}...">
{text}</textarea>
<div class="editor-meta"><span class="char-count">{chars} символов</span><span class="filled-mark"{filled_mark}>✓ Заполнено</span></div>
</div>"#,
                code = lang.code(),
                native = lang.native_name(),
                native_lower = lang.native_name().to_lowercase(),
                field = escape_html(&self.field_name(lang)),
                text = escape_html(self.value.get(lang)),
                chars = status.chars,
            ));
        }
        html.push_str("</div>\n<div class=\"editor-summary\"><span>Заполнение переводов:</span><span class=\"editor-dots\">");

        for status in self.statuses() {
            let (class, state) = if status.filled {
                ("dot filled", "Заполнено")
            } else {
                ("dot", "Не заполнено")
            };
            html.push_str(&format!(
                r#"<span class="{class}" data-lang="{code}" title="{native}: {state}"></span>"#,
                code = status.language.code(),
                native = status.language.native_name(),
            ));
        }

        html.push_str(&format!(
            "</span>\n<div class=\"editor-summary-count\">Заполнено: {}</div></div>\n</div>",
            self.completion()
        ));
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initial_tab_is_primary_language() {
        let editor = TranslationEditor::display("title", "Название", &LocalizedText::new());
        assert_eq!(editor.active_tab(), Language::Ru);
    }

    #[test]
    fn test_switching_tabs_keeps_value() {
        let value = LocalizedText::primary_only("a");
        let mut emitted = Vec::new();
        let mut editor = TranslationEditor::new("title", "Название", value.clone(), |v| emitted.push(v));
        editor.select_tab(Language::De);
        assert_eq!(editor.active_tab(), Language::De);
        assert_eq!(editor.value(), &value);
        drop(editor);
        assert!(emitted.is_empty());
    }

    #[test]
    fn test_edit_replaces_only_the_active_language() {
        let value = normalize(&json!({"ru": "a", "en": "", "tr": "c"}));
        let mut emitted = Vec::new();
        let mut editor = TranslationEditor::new("title", "Название", value.clone(), |v| emitted.push(v));
        editor.select_tab(Language::En);
        editor.edit("b");
        drop(editor);

        assert_eq!(emitted.len(), 1);
        let next = &emitted[0];
        assert_eq!(next.get(Language::En), "b");
        for lang in Language::ALL.into_iter().filter(|l| *l != Language::En) {
            assert_eq!(next.get(lang), value.get(lang));
        }
    }

    #[test]
    fn test_raw_values_are_normalized() {
        let mut editor = TranslationEditor::display("title", "Название", &LocalizedText::new());
        editor.set_raw_value(&json!("legacy title"));
        assert_eq!(editor.value().get(Language::Ru), "legacy title");
        assert_eq!(editor.value().get(Language::En), "");
    }

    #[test]
    fn test_completion_counts_trimmed_entries() {
        let value = normalize(&json!({"ru": "a", "en": "b", "tr": "c", "fr": "   ", "de": ""}));
        let editor = TranslationEditor::display("title", "Название", &value);
        assert_eq!(editor.completion(), Completion { filled: 3, total: 7 });
        assert_eq!(editor.completion().to_string(), "3 из 7 языков");
        assert!(editor.render().contains("3 из 7 языков"));

        let fr = editor.statuses()[3];
        assert_eq!(fr.language, Language::Fr);
        assert_eq!(fr.chars, 3);
        assert!(!fr.filled);
    }

    #[test]
    fn test_read_submission_emits_changed_languages() {
        let value = normalize(&json!({"ru": "старое"}));
        let mut latest = None;
        let mut editor = TranslationEditor::new("name", "Название", value, |v| latest = Some(v));
        let fields: FormFields = [
            ("name[ru]", "новое"),
            ("name[en]", "new"),
            ("name[tab]", "en"),
            ("other[ru]", "ignored"),
        ]
        .into_iter()
        .collect();

        editor.read_submission(&fields);
        assert_eq!(editor.active_tab(), Language::En);
        drop(editor);

        let latest = latest.unwrap();
        assert_eq!(latest.get(Language::Ru), "новое");
        assert_eq!(latest.get(Language::En), "new");
        assert_eq!(latest.get(Language::Tr), "");
    }

    /// Text a browser submits for a rendered textarea: the parser drops one
    /// leading line feed and line breaks are sent as CRLF
    fn submitted_textarea(html: &str, field: &str) -> String {
        let start = html.find(&format!(r#"<textarea name="{}""#, field)).unwrap();
        let open_end = start + html[start..].find('>').unwrap() + 1;
        let close = open_end + html[open_end..].find("</textarea>").unwrap();
        let content = &html[open_end..close];
        let content = content.strip_prefix('\n').unwrap_or(content);
        content
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
            .replace('\n', "\r\n")
    }

    #[test]
    fn test_rendered_text_survives_resubmission() {
        let value = LocalizedText::primary_only("\nfirst line")
            .with(Language::En, "a\nb")
            .with(Language::De, "\n\n<b> & 'x'");
        let html = TranslationEditor::display("title", "Название", &value).render();

        let fields: FormFields = Language::ALL
            .into_iter()
            .map(|lang| {
                let field = format!("title[{}]", lang.code());
                let text = submitted_textarea(&html, &field);
                (field, text)
            })
            .collect();

        let mut changes = Vec::new();
        let mut editor = TranslationEditor::new("title", "Название", value.clone(), |v| changes.push(v));
        editor.read_submission(&fields);
        assert_eq!(editor.value(), &value);
        drop(editor);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_crlf_submission_is_read_as_lf() {
        let mut latest = None;
        let mut editor = TranslationEditor::new("title", "", LocalizedText::new(), |v| latest = Some(v));
        let fields: FormFields = [("title[en]", "one\r\ntwo")].into_iter().collect();
        editor.read_submission(&fields);
        drop(editor);

        assert_eq!(latest.unwrap().get(Language::En), "one\ntwo");
    }

    #[test]
    fn test_render_escapes_text_and_marks_active_tab() {
        let value = LocalizedText::primary_only("<script>").with(Language::Ar, "مرحبا");
        let mut editor = TranslationEditor::display("description", "Описание", &value);
        editor.select_tab(Language::Ar);
        let html = editor.render();

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains(r#"name="description[tab]" value="ar" checked"#));
        assert!(html.contains(r#"name="description[ar]" rows="3" dir="rtl""#));
        assert!(html.contains(r#"<div class="editor-panel" data-lang="ru" hidden>"#));
    }
}
