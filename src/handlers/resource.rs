//! Generic handlers of the resource pages
//!
//! Each route builds a fresh [`ResourcePage`], loads it, applies one
//! transition and renders the resulting state. Successful mutations answer
//! with a redirect to the list instead, so reloading the browser page does
//! not submit them again.

use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;

use super::AppState;
use crate::models::RecordId;
use crate::state::{ResourceForm, ResourcePage};
use crate::utils::errors::{AdminError, ApiError};
use crate::utils::form_fields::FormFields;
use crate::views::resource::query_suffix;
use crate::views::{render_resource_page, ResourceView};

/// Query parameters shared by every page route
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub user: Option<String>,
}

impl PageQuery {
    /// User filter; blank values mean no filter
    pub fn filter(&self) -> Option<RecordId> {
        self.user
            .as_deref()
            .map(str::trim)
            .filter(|user| !user.is_empty())
            .map(RecordId::new)
    }
}

/// Routes of one resource page, mounted under its path
pub fn routes<R: ResourceView>() -> Router<AppState> {
    Router::new()
        .route(R::PATH, get(list::<R>).post(create::<R>))
        .route(&format!("{}/new", R::PATH), get(new_form::<R>))
        .route(&format!("{}/{{id}}", R::PATH), post(update::<R>))
        .route(&format!("{}/{{id}}/edit", R::PATH), get(edit_form::<R>))
        .route(
            &format!("{}/{{id}}/delete", R::PATH),
            get(confirm_delete::<R>).post(delete::<R>),
        )
}

async fn loaded_page<R: ResourceView>(state: &AppState, query: &PageQuery) -> ResourcePage<R> {
    let mut page = ResourcePage::<R>::new(state.api.clone()).with_filter(query.filter());
    page.load().await;
    page
}

fn render<R: ResourceView>(page: ResourcePage<R>, state: &AppState, status: StatusCode) -> Response {
    let html = render_resource_page(&page.into_state(), &state.settings.app);
    (status, Html(html)).into_response()
}

/// Redirect to the list after a successful mutation, keeping the filter
fn back_to_list<R: ResourceView>(query: &PageQuery) -> Response {
    let href = format!("{}{}", R::PATH, query_suffix(query.filter().as_ref()));
    Redirect::to(&href).into_response()
}

/// Status of a page whose transition failed
fn failure_status(error: &AdminError) -> StatusCode {
    match error {
        AdminError::Form(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AdminError::Api(ApiError::Status { status: 404, .. }) => StatusCode::NOT_FOUND,
        AdminError::Api(_) => StatusCode::BAD_GATEWAY,
        AdminError::InvalidStateTransition { .. } | AdminError::RecordNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn list<R: ResourceView>(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Response {
    let page = loaded_page::<R>(&state, &query).await;
    render(page, &state, StatusCode::OK)
}

async fn new_form<R: ResourceView>(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let mut page = loaded_page::<R>(&state, &query).await;
    page.open_create();
    render(page, &state, StatusCode::OK)
}

async fn edit_form<R: ResourceView>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let mut page = loaded_page::<R>(&state, &query).await;
    page.open_edit(&RecordId::new(id));
    let status = if page.state().modal.shows_form() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    render(page, &state, status)
}

async fn create<R: ResourceView>(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let fields = FormFields::new(pairs);
    let mut page = loaded_page::<R>(&state, &query).await;
    page.open_create();

    match page.submit(R::Form::from_fields(&fields)).await {
        Ok(()) => back_to_list::<R>(&query),
        Err(error) => {
            let status = failure_status(&error);
            render(page, &state, status)
        }
    }
}

async fn update<R: ResourceView>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let fields = FormFields::new(pairs);
    let mut page = loaded_page::<R>(&state, &query).await;
    page.open_edit_submitted(&RecordId::new(id));

    match page.submit(R::Form::from_fields(&fields)).await {
        Ok(()) => back_to_list::<R>(&query),
        Err(error) => {
            let status = failure_status(&error);
            render(page, &state, status)
        }
    }
}

async fn confirm_delete<R: ResourceView>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let mut page = loaded_page::<R>(&state, &query).await;
    page.request_delete(&RecordId::new(id));
    render(page, &state, StatusCode::OK)
}

async fn delete<R: ResourceView>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let fields = FormFields::new(pairs);
    let confirmed = fields.get("confirmed") == Some("true");
    let mut page = loaded_page::<R>(&state, &query).await;

    match page.delete(&RecordId::new(id), &confirmed).await {
        Ok(_) => back_to_list::<R>(&query),
        Err(error) => {
            let status = failure_status(&error);
            render(page, &state, status)
        }
    }
}
