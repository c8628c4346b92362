//! Generic rendering of a resource page: list, form modal and delete dialog

use super::components::{render_confirm_dialog, render_error_banner, render_modal};
use super::layout::render_layout;
use crate::config::AppConfig;
use crate::models::{ApiRecord, RecordId};
use crate::state::{LoadPhase, Modal, PageState, Resource};
use crate::utils::helpers::{encode_path_segment, escape_html};

/// How a resource shows up on its page
pub trait ResourceView: Resource + Sized {
    /// Title of the create modal, also the label of the add button
    const CREATE_TITLE: &'static str;
    const EDIT_TITLE: &'static str;
    const CREATE_SUBMIT: &'static str;
    /// Table headers, without the actions column
    const COLUMNS: &'static [&'static str];

    /// Cells of one table row, already escaped
    fn render_cells(record: &Self::Record, lookups: &Self::Lookups, app: &AppConfig) -> Vec<String>;

    /// Inputs of the create/edit form
    fn render_form_fields(form: &Self::Form, lookups: &Self::Lookups) -> String;

    /// Extra controls between the header and the table
    fn render_toolbar(_state: &PageState<Self>) -> String {
        String::new()
    }
}

/// Query string carrying the page filter across links and forms
pub fn query_suffix(filter: Option<&RecordId>) -> String {
    filter
        .map(|user| format!("?user={}", encode_path_segment(user.as_str())))
        .unwrap_or_default()
}

/// Render the full page for a state
pub fn render_resource_page<R: ResourceView>(state: &PageState<R>, app: &AppConfig) -> String {
    let query = query_suffix(state.filter.as_ref());
    let list_href = format!("{}{}", R::PATH, query);

    let mut content = format!(
        r#"<div class="page-header"><h1>{title}</h1><a href="{path}/new{query}" class="button button-success">+ {add}</a></div>"#,
        title = escape_html(R::TITLE),
        path = R::PATH,
        query = escape_html(&query),
        add = escape_html(R::CREATE_TITLE),
    );
    content.push_str(&R::render_toolbar(state));
    content.push_str(&render_table(state, app, &query));

    match &state.modal {
        Modal::Closed => {}
        Modal::Create | Modal::Edit(_) => content.push_str(&render_form_modal(state, &query, &list_href)),
        Modal::ConfirmDelete(id) => {
            let action = format!("{}/{}/delete{}", R::PATH, id.path_segment(), query);
            content.push_str(&render_confirm_dialog(R::DELETE_PROMPT, &action, &list_href));
        }
    }

    render_layout(R::TITLE, R::PATH, app, &content)
}

fn render_table<R: ResourceView>(state: &PageState<R>, app: &AppConfig, query: &str) -> String {
    let headers: String = R::COLUMNS
        .iter()
        .chain(std::iter::once(&"Действия"))
        .map(|column| format!("<th>{}</th>", escape_html(column)))
        .collect();

    let mut rows = String::new();
    for record in &state.records {
        let cells: String = R::render_cells(record, &state.lookups, app)
            .into_iter()
            .map(|cell| format!("<td>{}</td>", cell))
            .collect();
        let item = format!("{}/{}", R::PATH, record.id().path_segment());
        rows.push_str(&format!(
            r#"<tr>{cells}<td class="actions"><a href="{item}/edit{query}">Изменить</a><a href="{item}/delete{query}" class="delete">Удалить</a></td></tr>"#,
            item = escape_html(&item),
            query = escape_html(query),
        ));
    }

    if state.records.is_empty() {
        let message = match state.phase {
            LoadPhase::Failed => "Не удалось загрузить данные",
            LoadPhase::Loading => "Загрузка...",
            LoadPhase::Ready => "Записей пока нет",
        };
        rows.push_str(&format!(
            r#"<tr><td class="empty" colspan="{span}">{message}</td></tr>"#,
            span = R::COLUMNS.len() + 1,
        ));
    }

    format!("<table><thead><tr>{headers}</tr></thead><tbody>{rows}</tbody></table>")
}

fn render_form_modal<R: ResourceView>(state: &PageState<R>, query: &str, list_href: &str) -> String {
    let (title, action, submit) = match &state.modal {
        Modal::Edit(id) => (
            R::EDIT_TITLE,
            format!("{}/{}{}", R::PATH, id.path_segment(), query),
            "Сохранить изменения",
        ),
        _ => (R::CREATE_TITLE, format!("{}{}", R::PATH, query), R::CREATE_SUBMIT),
    };

    let error = state
        .form_error
        .as_deref()
        .map(|message| render_error_banner("Ошибка сохранения", message, None))
        .unwrap_or_default();

    let body = format!(
        r#"<form method="post" action="{action}">
{error}
{fields}
<div class="modal-footer"><a href="{list_href}" class="button">Отмена</a><button type="submit" class="button button-primary">{submit}</button></div>
</form>"#,
        action = escape_html(&action),
        fields = R::render_form_fields(&state.form, &state.lookups),
        list_href = escape_html(list_href),
        submit = escape_html(submit),
    );

    render_modal(title, list_href, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_suffix() {
        assert_eq!(query_suffix(None), "");
        assert_eq!(query_suffix(Some(&RecordId::new("user 1"))), "?user=user%201");
    }
}
