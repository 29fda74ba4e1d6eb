//! Calculator routes: live field sanitization and the add action.

use askama::Template;
use axum::{extract::State, response::Html, Form, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::input::NumericInputPair;
use crate::state::AppState;
use crate::ui::pages::CalculatorPage;

#[derive(Debug, Deserialize)]
pub struct NumberForm {
    #[serde(default)]
    pub number1: String,
    #[serde(default)]
    pub number2: String,
}

#[derive(Debug, Serialize)]
pub struct NumericInputState {
    #[serde(flatten)]
    pub fields: NumericInputPair,
    pub submit_enabled: bool,
}

/// GET /calculator
pub async fn page_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state).await
}

/// POST /calculator/input
///
/// Called on every keystroke. Returns the sanitized fields and whether
/// the calculate button should be enabled.
pub async fn input_handler(
    State(state): State<AppState>,
    Form(form): Form<NumberForm>,
) -> Json<NumericInputState> {
    let fields = state
        .controller
        .read_number_pair(&form.number1, &form.number2)
        .await;
    Json(NumericInputState {
        submit_enabled: fields.submit_enabled(),
        fields,
    })
}

/// POST /calculator/add
pub async fn add_handler(
    State(state): State<AppState>,
    Form(form): Form<NumberForm>,
) -> Result<Html<String>, AppError> {
    state
        .controller
        .read_number_pair(&form.number1, &form.number2)
        .await;
    // Either way the result line now holds the outcome.
    if let Err(e) = state.controller.calculate().await {
        debug!("Calculation ended without a result: {e}");
    }
    render_page(&state).await
}

async fn render_page(state: &AppState) -> Result<Html<String>, AppError> {
    let view = state.controller.calculator_view().await;
    let page = CalculatorPage::new(&view, state.controller.calculator_busy());
    Ok(Html(page.render()?))
}
