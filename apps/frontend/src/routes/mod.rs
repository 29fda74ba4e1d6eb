pub mod calculator;
pub mod health;
pub mod resume;

use askama::Template;
use axum::{
    extract::{DefaultBodyLimit, State},
    response::Html,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::input::MAX_FILE_BYTES;
use crate::state::AppState;
use crate::ui::pages::IndexPage;

/// Request body cap. Above the file cap so oversized PDFs still reach the size check.
const UPLOAD_BODY_LIMIT: usize = 2 * MAX_FILE_BYTES;

/// GET /
async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = IndexPage {
        api_base_url: &state.config.api_base_url,
    };
    Ok(Html(page.render()?))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health::health_handler))
        // Resume viewer
        .route("/resume", get(resume::page_handler))
        .route("/resume/select", post(resume::select_handler))
        .route("/resume/parse", post(resume::parse_handler))
        .route("/resume/reset", post(resume::reset_handler))
        // Calculator
        .route("/calculator", get(calculator::page_handler))
        .route("/calculator/input", post(calculator::input_handler))
        .route("/calculator/add", post(calculator::add_handler))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
        .with_state(state)
}
