//! Dashboard page

use super::components::render_error_banner;
use super::layout::render_layout;
use crate::config::AppConfig;
use crate::models::DashboardStats;
use crate::state::DashboardPage;
use crate::utils::helpers::escape_html;

const QUICK_LINKS: [(&str, &str); 4] = [
    ("/categories", "Управление категориями"),
    ("/achievements", "Управление достижениями"),
    ("/rewards", "Управление наградами"),
    ("/progress", "Просмотр прогресса"),
];

fn stat_cards(stats: &DashboardStats) -> [(&'static str, u64); 6] {
    [
        ("Всего достижений", stats.achievements),
        ("Всего наград", stats.rewards),
        ("Категории", stats.categories),
        ("Записи прогресса", stats.progress),
        ("Завершенные достижения", stats.progress_stats.completed),
        ("Активные пользователи", stats.progress_stats.in_progress),
    ]
}

fn render_panel(title: &str, lines: &[(&str, u64)]) -> String {
    let lines: String = lines
        .iter()
        .map(|(label, value)| {
            format!(r#"<div class="stat-line"><span class="muted">{label}:</span><strong>{value}</strong></div>"#)
        })
        .collect();
    format!(r#"<div class="card"><h3>{title}</h3>{lines}</div>"#)
}

pub fn render_dashboard(page: &DashboardPage, app: &AppConfig, api_base_url: &str) -> String {
    let stats = &page.stats;
    let mut content = String::from(
        r#"<div class="page-header"><div><h1>Панель управления</h1><p class="muted">Добро пожаловать в админ-панель системы достижений</p></div></div>"#,
    );

    if let Some(error) = &page.error {
        content.push_str(&render_error_banner("Ошибка загрузки", error, Some("/")));
    }

    content.push_str(r#"<div class="stats-grid">"#);
    for (title, value) in stat_cards(stats) {
        content.push_str(&format!(
            r#"<div class="card"><div class="stat-title">{title}</div><div class="stat-value">{value}</div></div>"#
        ));
    }
    content.push_str("</div>");

    content.push_str(r#"<div class="stats-grid">"#);
    content.push_str(&render_panel(
        "Статистика достижений",
        &[
            ("Видимые", stats.achievement_stats.visible),
            ("Скрытые", stats.achievement_stats.hidden),
        ],
    ));
    content.push_str(&render_panel(
        "Статистика наград",
        &[
            ("Применимые", stats.reward_stats.applicable),
            ("Всего", stats.reward_stats.total),
        ],
    ));
    content.push_str(&render_panel(
        "Статистика прогресса",
        &[
            ("Завершено", stats.progress_stats.completed),
            ("В процессе", stats.progress_stats.in_progress),
            ("Заблокировано", stats.progress_stats.blocked),
        ],
    ));
    content.push_str("</div>");

    let links: String = QUICK_LINKS
        .iter()
        .map(|(href, label)| format!(r#"<a href="{href}">{label}</a>"#))
        .collect();

    content.push_str(&format!(
        r#"<div class="stats-grid">
<div class="card quick-links"><h2>Быстрые действия</h2>{links}</div>
<div class="card"><h2>Системная информация</h2>
<div class="stat-line"><span class="muted">Окружение:</span><strong>{environment}</strong></div>
<div class="stat-line"><span class="muted">API:</span><strong>{api}</strong></div>
<div class="stat-line"><span class="muted">Версия:</span><strong>{version}</strong></div>
</div>
</div>
<div class="card"><h2>О системе</h2><p>Система достижений позволяет создавать и управлять достижениями, наградами и отслеживать прогресс пользователей. Поддерживается многоязычность для названий и описаний.</p></div>"#,
        environment = escape_html(&app.environment),
        api = escape_html(api_base_url),
        version = crate::VERSION,
    ));

    render_layout("Дашборд", "/", app, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::state::LoadPhase;

    fn page(stats: DashboardStats, error: Option<&str>) -> DashboardPage {
        let settings = Settings::default();
        let mut page = DashboardPage::new(crate::services::ApiClient::new(&settings.api).unwrap());
        page.stats = stats;
        page.error = error.map(str::to_string);
        page.phase = if error.is_some() { LoadPhase::Failed } else { LoadPhase::Ready };
        page
    }

    #[test]
    fn test_cards_show_counts() {
        let mut stats = DashboardStats::default();
        stats.achievements = 12;
        stats.progress_stats.in_progress = 4;

        let html = render_dashboard(&page(stats, None), &Settings::default().app, "http://api");
        assert!(html.contains(r#"<div class="stat-title">Всего достижений</div><div class="stat-value">12</div>"#));
        assert!(html.contains(r#"<div class="stat-title">Активные пользователи</div><div class="stat-value">4</div>"#));
        assert!(!html.contains("Повторить"));
    }

    #[test]
    fn test_failure_shows_retry() {
        let html = render_dashboard(
            &page(DashboardStats::default(), Some(crate::state::dashboard::STATS_ERROR)),
            &Settings::default().app,
            "http://api",
        );
        assert!(html.contains("Ошибка загрузки"));
        assert!(html.contains("Не удалось загрузить статистику"));
        assert!(html.contains("Повторить"));
    }
}
