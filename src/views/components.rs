//! Reusable HTML fragments

use crate::utils::helpers::{escape_html, is_allowed_image_url};

/// Modal dialog shown over the list; closing it navigates to `close_href`
pub fn render_modal(title: &str, close_href: &str, body: &str) -> String {
    format!(
        r#"<div class="modal-backdrop">
<div class="modal" role="dialog" aria-modal="true">
<div class="modal-header"><h2>{title}</h2><a href="{close_href}" class="close" aria-label="Закрыть">✕</a></div>
{body}
</div>
</div>"#,
        title = escape_html(title),
        close_href = escape_html(close_href),
    )
}

/// Delete confirmation; both answers post back so the server decides
pub fn render_confirm_dialog(prompt: &str, action: &str, cancel_href: &str) -> String {
    let body = format!(
        r#"<p>{prompt}</p>
<form method="post" action="{action}">
<div class="modal-footer">
<button type="submit" name="confirmed" value="false" class="button">Отмена</button>
<button type="submit" name="confirmed" value="true" class="button button-danger">Удалить</button>
</div>
</form>"#,
        prompt = escape_html(prompt),
        action = escape_html(action),
    );
    render_modal("Подтверждение удаления", cancel_href, &body)
}

/// Error banner, optionally with a retry link
pub fn render_error_banner(title: &str, message: &str, retry_href: Option<&str>) -> String {
    let retry = retry_href
        .map(|href| format!(r#" <a href="{}" class="button">Повторить</a>"#, escape_html(href)))
        .unwrap_or_default();

    format!(
        r#"<div class="alert alert-error" role="alert"><div class="alert-title">{title}</div><div>{message}</div>{retry}</div>"#,
        title = escape_html(title),
        message = escape_html(message),
    )
}

/// Icon cell: allowed image URLs render as images, anything else as text
pub fn render_icon(icon: Option<&str>, image_domains: &[String]) -> String {
    match icon.map(str::trim).filter(|icon| !icon.is_empty()) {
        None => "Нет".to_string(),
        Some(icon) if is_allowed_image_url(icon, image_domains) => {
            format!(r#"<img src="{src}" alt="" class="icon-image">"#, src = escape_html(icon))
        }
        Some(icon) => escape_html(icon),
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Да"
    } else {
        "Нет"
    }
}

/// Single-line text input with a label
pub fn render_text_input(name: &str, label: &str, value: &str, placeholder: &str, required: bool) -> String {
    let (mark, attr) = if required { (" *", " required") } else { ("", "") };
    format!(
        r#"<div class="field"><label for="{name}">{label}{mark}</label><input type="text" id="{name}" name="{name}" value="{value}" placeholder="{placeholder}"{attr}></div>"#,
        name = escape_html(name),
        label = escape_html(label),
        value = escape_html(value),
        placeholder = escape_html(placeholder),
    )
}

/// Multi-line text input with a label
pub fn render_textarea(name: &str, label: &str, value: &str, placeholder: &str, rows: u8) -> String {
    format!(
        r#"<div class="field"><label for="{name}">{label}</label><textarea id="{name}" name="{name}" rows="{rows}" placeholder="{placeholder}">
{value}</textarea></div>"#,
        name = escape_html(name),
        label = escape_html(label),
        value = escape_html(value),
        placeholder = escape_html(placeholder),
    )
}

/// Checkbox with a label; unchecked boxes are simply absent from the submission
pub fn render_checkbox(name: &str, label: &str, checked: bool, hint: &str) -> String {
    let checked = if checked { " checked" } else { "" };
    format!(
        r#"<div class="field"><label><input type="checkbox" name="{name}" value="true"{checked}> {label}</label><div class="field-hint">{hint}</div></div>"#,
        name = escape_html(name),
        label = escape_html(label),
        hint = escape_html(hint),
    )
}

/// Select box. `placeholder` adds a leading empty option.
pub fn render_select(
    name: &str,
    label: &str,
    options: &[(String, String)],
    selected: &str,
    placeholder: Option<&str>,
    required: bool,
) -> String {
    let mut html = format!(
        r#"<div class="field"><label for="{name}">{label}{mark}</label><select id="{name}" name="{name}"{attr}>"#,
        name = escape_html(name),
        label = escape_html(label),
        mark = if required { " *" } else { "" },
        attr = if required { " required" } else { "" },
    );

    if let Some(placeholder) = placeholder {
        html.push_str(&format!(r#"<option value="">{}</option>"#, escape_html(placeholder)));
    }

    for (value, text) in options {
        let is_selected = if value == selected { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{value}"{is_selected}>{text}</option>"#,
            value = escape_html(value),
            text = escape_html(text),
        ));
    }

    html.push_str("</select></div>");
    html
}
