//! Tables and forms of the four resource pages

use super::components::{
    render_checkbox, render_icon, render_select, render_text_input, render_textarea, yes_no,
};
use super::resource::ResourceView;
use crate::config::AppConfig;
use crate::models::{
    Achievement, Category, ProgressRecord, ProgressStatus, RecordId, Reward, RewardType,
};
use crate::state::{
    AchievementForm, Achievements, Categories, CategoryForm, PageState, Progress, ProgressForm,
    RewardForm, Rewards,
};
use crate::utils::helpers::{escape_html, format_date, truncate_text};

const UNTITLED: &str = "Без названия";
const DESCRIPTION_PREVIEW: usize = 60;

fn category_options(categories: &[Category]) -> Vec<(String, String)> {
    categories
        .iter()
        .map(|category| (category.id.to_string(), category.name.display_or(UNTITLED).to_string()))
        .collect()
}

fn achievement_options(achievements: &[Achievement]) -> Vec<(String, String)> {
    achievements
        .iter()
        .map(|achievement| {
            (
                achievement.id.to_string(),
                achievement.title.display_or(UNTITLED).to_string(),
            )
        })
        .collect()
}

fn achievement_title<'a>(
    achievements: &'a [Achievement],
    id: Option<&RecordId>,
    missing: &'a str,
) -> &'a str {
    id.and_then(|id| achievements.iter().find(|achievement| &achievement.id == id))
        .map(|achievement| achievement.title.display_or(UNTITLED))
        .unwrap_or(missing)
}

impl ResourceView for Categories {
    const CREATE_TITLE: &'static str = "Добавить категорию";
    const EDIT_TITLE: &'static str = "Редактировать категорию";
    const CREATE_SUBMIT: &'static str = "Создать категорию";
    const COLUMNS: &'static [&'static str] = &["Ключ", "Название"];

    fn render_cells(category: &Category, _lookups: &(), _app: &AppConfig) -> Vec<String> {
        let key = if category.key.is_empty() { "Не указан" } else { category.key.as_str() };
        vec![
            format!("<code>{}</code>", escape_html(key)),
            escape_html(category.name.display_or(UNTITLED)),
        ]
    }

    fn render_form_fields(form: &CategoryForm, _lookups: &()) -> String {
        [
            render_text_input(
                "key",
                "Ключ категории",
                &form.key,
                "Например: beginner, advanced, expert",
                true,
            ),
            form.name.editor("name", "Название").render(),
        ]
        .concat()
    }
}

impl ResourceView for Achievements {
    const CREATE_TITLE: &'static str = "Добавить достижение";
    const EDIT_TITLE: &'static str = "Редактировать достижение";
    const CREATE_SUBMIT: &'static str = "Создать достижение";
    const COLUMNS: &'static [&'static str] =
        &["Название", "Описание", "Категория", "Иконка", "Скрыто", "Цель"];

    fn render_cells(achievement: &Achievement, categories: &Vec<Category>, app: &AppConfig) -> Vec<String> {
        let category = achievement
            .category_id
            .as_ref()
            .and_then(|id| categories.iter().find(|category| &category.id == id))
            .map(|category| category.name.display_or("Без категории"))
            .unwrap_or("Без категории");

        vec![
            escape_html(achievement.title.display_or(UNTITLED)),
            escape_html(&truncate_text(achievement.description.display_or("-"), DESCRIPTION_PREVIEW)),
            escape_html(category),
            render_icon(achievement.icon.as_deref(), &app.image_domains),
            yes_no(achievement.hidden).to_string(),
            achievement
                .target
                .as_ref()
                .map(|target| target.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]
    }

    fn render_form_fields(form: &AchievementForm, categories: &Vec<Category>) -> String {
        [
            form.title.editor("title", "Название *").render(),
            form.description.editor("description", "Описание").render(),
            render_select(
                "categoryId",
                "Категория",
                &category_options(categories),
                &form.category_id,
                Some("Выберите категорию"),
                false,
            ),
            render_text_input(
                "icon",
                "Иконка",
                &form.icon,
                "Название иконки (например: trophy, star, medal)",
                false,
            ),
            render_checkbox(
                "hidden",
                "Скрытое достижение",
                form.hidden,
                "Скрытые достижения не видны пользователю до получения",
            ),
            render_text_input("target", "Цель", &form.target, "Например: 10", false),
        ]
        .concat()
    }
}

impl ResourceView for Rewards {
    const CREATE_TITLE: &'static str = "Добавить награду";
    const EDIT_TITLE: &'static str = "Редактировать награду";
    const CREATE_SUBMIT: &'static str = "Создать награду";
    const COLUMNS: &'static [&'static str] =
        &["Название", "Тип", "Описание", "Достижение", "Иконка", "Применимо"];

    fn render_cells(reward: &Reward, achievements: &Vec<Achievement>, app: &AppConfig) -> Vec<String> {
        vec![
            escape_html(reward.title.display_or(UNTITLED)),
            escape_html(RewardType::label_for(&reward.reward_type)),
            escape_html(&truncate_text(reward.description.display_or("-"), DESCRIPTION_PREVIEW)),
            escape_html(achievement_title(
                achievements,
                reward.achievement_id.as_ref(),
                "Без достижения",
            )),
            render_icon(reward.icon.as_deref(), &app.image_domains),
            yes_no(reward.is_applicable).to_string(),
        ]
    }

    fn render_form_fields(form: &RewardForm, achievements: &Vec<Achievement>) -> String {
        let mut types: Vec<(String, String)> = RewardType::ALL
            .into_iter()
            .map(|kind| (kind.code().to_string(), kind.label().to_string()))
            .collect();
        if RewardType::from_code(&form.reward_type).is_none() {
            types.push((form.reward_type.clone(), form.reward_type.clone()));
        }

        [
            form.title.editor("title", "Название *").render(),
            render_select("type", "Тип награды", &types, &form.reward_type, None, true),
            render_select(
                "achievementId",
                "Достижение",
                &achievement_options(achievements),
                &form.achievement_id,
                Some("Выберите достижение"),
                false,
            ),
            form.description.editor("description", "Описание").render(),
            render_text_input(
                "icon",
                "Иконка",
                &form.icon,
                "Название иконки (например: gift, star, medal)",
                false,
            ),
            render_checkbox(
                "isApplicable",
                "Применимо",
                form.is_applicable,
                "Может ли награда быть применена пользователем",
            ),
            render_textarea(
                "details",
                "Детали (JSON)",
                &form.details,
                r#"{"amount": 100, "currency": "USD", "expires": "2024-12-31"}"#,
                6,
            ),
        ]
        .concat()
    }
}

impl ResourceView for Progress {
    const CREATE_TITLE: &'static str = "Добавить прогресс";
    const EDIT_TITLE: &'static str = "Редактировать прогресс";
    const CREATE_SUBMIT: &'static str = "Создать запись";
    const COLUMNS: &'static [&'static str] =
        &["Пользователь", "Достижение", "Статус", "Текущий шаг", "Дата создания"];

    fn render_cells(record: &ProgressRecord, achievements: &Vec<Achievement>, _app: &AppConfig) -> Vec<String> {
        vec![
            record
                .user_id
                .as_ref()
                .map(|id| escape_html(id.as_str()))
                .unwrap_or_else(|| "-".to_string()),
            escape_html(achievement_title(achievements, record.achievement_id.as_ref(), UNTITLED)),
            format!(
                r#"<span class="{}">{}</span>"#,
                record.progress.badge_class(),
                record.progress.label()
            ),
            record.current_step.to_string(),
            format_date(record.created_at),
        ]
    }

    fn render_form_fields(form: &ProgressForm, achievements: &Vec<Achievement>) -> String {
        let statuses: Vec<(String, String)> = ProgressStatus::ALL
            .into_iter()
            .map(|status| (status.code().to_string(), status.label().to_string()))
            .collect();

        [
            render_text_input("userId", "ID пользователя", &form.user_id, "Введите ID пользователя", true),
            render_select(
                "achievementId",
                "Достижение",
                &achievement_options(achievements),
                &form.achievement_id,
                Some("Выберите достижение"),
                true,
            ),
            render_select("progress", "Статус", &statuses, form.progress.code(), None, true),
            render_text_input(
                "currentStep",
                "Текущий шаг",
                &form.current_step,
                "Введите текущий шаг",
                false,
            ),
        ]
        .concat()
    }

    fn render_toolbar(state: &PageState<Self>) -> String {
        let user = state
            .filter
            .as_ref()
            .map(|user| escape_html(user.as_str()))
            .unwrap_or_default();
        let reset = if state.filter.is_some() {
            r#"<a href="/progress" class="button">Сбросить</a>"#
        } else {
            ""
        };

        format!(
            r#"<form method="get" action="/progress" class="filter-bar"><input type="text" name="user" value="{user}" placeholder="ID пользователя"><button type="submit" class="button">Показать</button>{reset}</form>"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::i18n::LocalizedText;
    use crate::state::Modal;
    use crate::views::resource::render_resource_page;
    use serde_json::json;

    fn achievement(id: &str, title: &str) -> Achievement {
        serde_json::from_value(json!({"id": id, "title": {"ru": title}})).unwrap()
    }

    #[test]
    fn test_achievement_without_category() {
        let record = achievement("1", "Первый шаг");
        let cells = Achievements::render_cells(&record, &Vec::new(), &Settings::default().app);
        assert_eq!(cells[0], "Первый шаг");
        assert_eq!(cells[2], "Без категории");
        assert_eq!(cells[5], "-");
    }

    #[test]
    fn test_reward_shows_linked_achievement() {
        let reward: Reward = serde_json::from_value(json!({
            "id": 5,
            "type": "bonus_crypto",
            "title": {"ru": "Бонус"},
            "achievementId": "a1",
            "isApplicable": true
        }))
        .unwrap();
        let cells = Rewards::render_cells(&reward, &vec![achievement("a1", "Марафон")], &Settings::default().app);
        assert_eq!(cells[1], "Бонус криптовалюты");
        assert_eq!(cells[3], "Марафон");
        assert_eq!(cells[5], "Да");
    }

    #[test]
    fn test_progress_row() {
        let record: ProgressRecord = serde_json::from_value(json!({
            "id": 9,
            "userId": 12345,
            "achievementId": "missing",
            "progress": "FINISHED",
            "currentStep": 3,
            "createdAt": "2024-03-05T08:00:00Z"
        }))
        .unwrap();
        let cells = Progress::render_cells(&record, &Vec::new(), &Settings::default().app);
        assert_eq!(cells[0], "12345");
        assert_eq!(cells[1], UNTITLED);
        assert!(cells[2].contains("badge-green"));
        assert!(cells[2].contains("Завершено"));
        assert_eq!(cells[4], "05.03.2024");
    }

    #[test]
    fn test_edit_modal_renders_form() {
        let mut state = PageState::<Categories>::default();
        state.records = vec![serde_json::from_value(json!({"id": 2, "key": "pro", "name": {"ru": "Профи"}})).unwrap()];
        state.modal = Modal::Edit(RecordId::new("2"));
        state.form = CategoryForm {
            key: "pro".to_string(),
            name: crate::state::LocalizedField::new(LocalizedText::primary_only("Профи")),
        };
        state.form_error = Some("Поле «key» обязательно для заполнения".to_string());

        let html = render_resource_page(&state, &Settings::default().app);
        assert!(html.contains(r#"action="/categories/2""#));
        assert!(html.contains("Редактировать категорию"));
        assert!(html.contains("Сохранить изменения"));
        assert!(html.contains(r#"name="name[ru]""#));
        assert!(html.contains("обязательно для заполнения"));
    }

    #[test]
    fn test_progress_filter_is_carried() {
        let mut state = PageState::<Progress>::default();
        state.filter = Some(RecordId::new("42"));
        state.modal = Modal::ConfirmDelete(RecordId::new("7"));

        let html = render_resource_page(&state, &Settings::default().app);
        assert!(html.contains(r#"action="/progress/7/delete?user=42""#));
        assert!(html.contains(r#"href="/progress/new?user=42""#));
        assert!(html.contains("Сбросить"));
        assert!(html.contains("Вы уверены, что хотите удалить эту запись прогресса?"));
    }
}
