//! Dashboard handler

use axum::extract::State;
use axum::response::Html;

use super::AppState;
use crate::state::DashboardPage;
use crate::views::render_dashboard;

/// `GET /`: aggregate statistics; a failed fetch renders the retry banner
pub async fn show(State(state): State<AppState>) -> Html<String> {
    let mut page = DashboardPage::new(state.api.clone());
    page.load().await;
    Html(render_dashboard(&page, &state.settings.app, state.api.base_url()))
}
