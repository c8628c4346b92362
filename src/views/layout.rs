//! Page shell: document head, sidebar navigation and footer

use crate::config::AppConfig;
use crate::utils::helpers::escape_html;

/// Browser title of every page
pub const APP_TITLE: &str = "Админ-панель достижений";

/// Sidebar entries as (label, route)
pub const MENU_ITEMS: [(&str, &str); 5] = [
    ("Дашборд", "/"),
    ("Категории", "/categories"),
    ("Достижения", "/achievements"),
    ("Награды", "/rewards"),
    ("Прогресс", "/progress"),
];

const STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f9fafb; color: #111827; min-height: 100vh; }
a { color: inherit; text-decoration: none; }
.shell { display: flex; }
.sidebar { position: fixed; inset: 0 auto 0 0; width: 16rem; background: #1f2937; color: #fff; display: flex; flex-direction: column; transform: translateX(-100%); transition: transform 0.2s; z-index: 40; }
.sidebar-title { padding: 1.5rem; font-size: 1.25rem; font-weight: 700; border-bottom: 1px solid #374151; }
.sidebar nav { flex: 1; padding: 1rem; }
.sidebar nav a { display: block; padding: 0.75rem 1rem; border-radius: 0.5rem; color: #d1d5db; margin-bottom: 0.25rem; }
.sidebar nav a:hover { background: #374151; color: #fff; }
.sidebar nav a.active { background: #2563eb; color: #fff; }
.sidebar-footer { padding: 1rem 1.5rem; font-size: 0.75rem; color: #9ca3af; border-top: 1px solid #374151; }
#menu-toggle { display: none; }
.menu-button { position: fixed; top: 1rem; left: 1rem; z-index: 50; background: #1f2937; color: #fff; padding: 0.5rem 0.75rem; border-radius: 0.5rem; cursor: pointer; }
#menu-toggle:checked ~ .sidebar { transform: translateX(0); }
main { flex: 1; min-height: 100vh; padding: 1.5rem; }
@media (min-width: 1024px) {
  .sidebar { transform: none; }
  .menu-button { display: none; }
  main { margin-left: 16rem; }
}
.page-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1.5rem; }
h1 { font-size: 1.5rem; font-weight: 700; }
.button { display: inline-block; padding: 0.5rem 1rem; border-radius: 0.5rem; border: none; font-size: 0.875rem; cursor: pointer; background: #e5e7eb; color: #111827; }
.button-primary { background: #2563eb; color: #fff; }
.button-success { background: #16a34a; color: #fff; }
.button-danger { background: #dc2626; color: #fff; }
.card { background: #fff; border-radius: 0.5rem; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1); padding: 1.5rem; }
table { width: 100%; border-collapse: collapse; background: #fff; border-radius: 0.5rem; overflow: hidden; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1); }
th { text-align: left; font-size: 0.75rem; text-transform: uppercase; color: #6b7280; background: #f9fafb; padding: 0.75rem 1.5rem; }
td { padding: 1rem 1.5rem; border-top: 1px solid #e5e7eb; font-size: 0.875rem; }
td.empty { text-align: center; color: #6b7280; }
.actions a { margin-right: 0.75rem; color: #4f46e5; }
.actions a.delete { color: #dc2626; }
.muted { color: #6b7280; font-size: 0.75rem; }
.badge { display: inline-block; padding: 0.125rem 0.5rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 600; }
.badge-yellow { background: #fef3c7; color: #92400e; }
.badge-red { background: #fee2e2; color: #991b1b; }
.badge-green { background: #dcfce7; color: #166534; }
.icon-image { width: 2rem; height: 2rem; object-fit: contain; }
.modal-backdrop { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center; padding: 1rem; z-index: 60; }
.modal { background: #fff; border-radius: 0.5rem; width: 100%; max-width: 48rem; max-height: 90vh; overflow-y: auto; padding: 1.5rem; }
.modal-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
.modal-header h2 { font-size: 1.25rem; font-weight: 600; }
.modal-footer { display: flex; justify-content: flex-end; gap: 0.75rem; margin-top: 1.5rem; }
.field { margin-bottom: 1rem; }
.field label { display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 0.25rem; }
.field input[type="text"], .field input[type="number"], .field select, .field textarea { width: 100%; padding: 0.5rem 0.75rem; border: 1px solid #d1d5db; border-radius: 0.5rem; font-size: 0.875rem; font-family: inherit; }
.field-hint { font-size: 0.75rem; color: #6b7280; margin-top: 0.25rem; }
.field-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.alert { padding: 1rem; border-radius: 0.5rem; margin-bottom: 1rem; }
.alert-error { background: #fef2f2; border: 1px solid #fecaca; color: #991b1b; }
.alert-title { font-weight: 600; }
.filter-bar { display: flex; gap: 0.5rem; align-items: center; margin-bottom: 1rem; }
.filter-bar input { padding: 0.5rem 0.75rem; border: 1px solid #d1d5db; border-radius: 0.5rem; }
.stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1.5rem; margin-bottom: 2rem; }
.stat-title { font-size: 0.875rem; color: #4b5563; }
.stat-value { font-size: 1.5rem; font-weight: 700; }
.stat-line { display: flex; justify-content: space-between; margin-top: 0.75rem; }
.quick-links a { display: block; padding: 0.75rem; border-radius: 0.5rem; background: #f3f4f6; margin-top: 0.5rem; }
.translation-editor { border: 1px solid #e5e7eb; border-radius: 0.5rem; padding: 0.75rem; }
.editor-label { font-size: 0.875rem; font-weight: 500; margin-bottom: 0.5rem; }
.editor-tabs { display: flex; flex-wrap: wrap; gap: 0.25rem; margin-bottom: 0.75rem; }
.editor-tab input { display: none; }
.editor-tab span { display: inline-block; padding: 0.25rem 0.75rem; border-radius: 0.375rem; background: #f3f4f6; font-size: 0.8125rem; cursor: pointer; }
.editor-tab input:checked + span { background: #2563eb; color: #fff; }
.editor-panel textarea { width: 100%; padding: 0.5rem 0.75rem; border: 1px solid #d1d5db; border-radius: 0.5rem; font-family: inherit; }
.editor-panel-title { font-size: 0.8125rem; color: #4b5563; margin-bottom: 0.25rem; }
.editor-meta { display: flex; justify-content: space-between; font-size: 0.75rem; color: #6b7280; margin-top: 0.25rem; }
.filled-mark { color: #16a34a; }
.editor-summary { display: flex; flex-wrap: wrap; align-items: center; gap: 0.5rem; margin-top: 0.75rem; font-size: 0.75rem; color: #4b5563; }
.editor-dots { display: inline-flex; gap: 0.25rem; }
.dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: #d1d5db; display: inline-block; }
.dot.filled { background: #16a34a; }
"#;

const SCRIPT: &str = r#"
document.querySelectorAll('.translation-editor').forEach(function (editor) {
  var panels = editor.querySelectorAll('.editor-panel');
  editor.querySelectorAll('.editor-tab input').forEach(function (tab) {
    tab.addEventListener('change', function () {
      panels.forEach(function (panel) { panel.hidden = panel.dataset.lang !== tab.value; });
    });
  });
  var summary = editor.querySelector('.editor-summary-count');
  function refresh() {
    var filled = 0;
    panels.forEach(function (panel) {
      var text = panel.querySelector('textarea').value;
      var isFilled = text.trim().length > 0;
      if (isFilled) { filled += 1; }
      panel.querySelector('.char-count').textContent = Array.from(text).length + ' символов';
      panel.querySelector('.filled-mark').hidden = !isFilled;
      var dot = editor.querySelector('.dot[data-lang="' + panel.dataset.lang + '"]');
      if (dot) { dot.classList.toggle('filled', isFilled); }
    });
    summary.textContent = 'Заполнено: ' + filled + ' из ' + panels.length + ' языков';
  }
  editor.querySelectorAll('textarea').forEach(function (area) { area.addEventListener('input', refresh); });
});
"#;

/// Wrap page content in the document shell
pub fn render_layout(title: &str, current_path: &str, app: &AppConfig, content: &str) -> String {
    let custom_key = app
        .custom_key
        .as_deref()
        .map(|key| format!(r#"<meta name="custom-key" content="{}">"#, escape_html(key)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<meta name="description" content="Система управления достижениями и наградами">
{custom_key}
<title>{title} · {app_title}</title>
<style>{styles}</style>
</head>
<body>
<div class="shell">
<input type="checkbox" id="menu-toggle">
<label for="menu-toggle" class="menu-button">☰</label>
{sidebar}
<main>
{content}
</main>
</div>
<script>{script}</script>
</body>
</html>"#,
        title = escape_html(title),
        app_title = APP_TITLE,
        styles = STYLES,
        sidebar = render_sidebar(current_path),
        script = SCRIPT,
    )
}

fn render_sidebar(current_path: &str) -> String {
    let links: String = MENU_ITEMS
        .iter()
        .map(|(label, href)| {
            let active = if is_active(href, current_path) { r#" class="active""# } else { "" };
            format!(r#"<a href="{href}"{active}>{label}</a>"#)
        })
        .collect();

    format!(
        r#"<aside class="sidebar">
<div class="sidebar-title">Админ-панель</div>
<nav>{links}</nav>
<div class="sidebar-footer">Система достижений v{version}</div>
</aside>"#,
        version = crate::VERSION,
    )
}

fn is_active(href: &str, current_path: &str) -> bool {
    if href == "/" {
        current_path == "/"
    } else {
        current_path == href || current_path.starts_with(&format!("{}/", href))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_current_page_is_highlighted() {
        let html = render_layout("Награды", "/rewards", &Settings::default().app, "<p>x</p>");
        assert!(html.contains(r#"<a href="/rewards" class="active">Награды</a>"#));
        assert!(html.contains(r#"<a href="/">Дашборд</a>"#));
        assert!(html.contains("<html lang=\"ru\">"));
        assert!(html.contains(APP_TITLE));
    }

    #[test]
    fn test_custom_key_meta() {
        let mut app = Settings::default().app;
        assert!(!render_layout("x", "/", &app, "").contains("custom-key"));

        app.custom_key = Some("abc\"1".to_string());
        let html = render_layout("x", "/", &app, "");
        assert!(html.contains(r#"<meta name="custom-key" content="abc&quot;1">"#));
    }

    #[test]
    fn test_active_matching() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/rewards"));
        assert!(is_active("/progress", "/progress/5/edit"));
        assert!(!is_active("/progress", "/progressive"));
    }
}
