//! Resume viewer routes: select (picker or drop), parse, reset.

use askama::Template;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::Html,
};
use bytes::Bytes;
use tracing::warn;

use crate::errors::{ActionError, AppError};
use crate::input::{FileCandidate, FileSource, ValidationError};
use crate::state::AppState;
use crate::ui::pages::ResumePage;

const FILE_FIELD: &str = "file";
const SOURCE_FIELD: &str = "source";

/// GET /resume
pub async fn page_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, None).await
}

/// POST /resume/select
///
/// Multipart body with the file under `file` and an optional `source` of
/// `picker` or `drop`. A rejected file is reported without touching the page state.
pub async fn select_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let candidate = match read_candidate(&mut multipart).await {
        Ok(c) => c,
        Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!("Upload exceeded the request body limit: {e}");
            return render_page(&state, Some(ValidationError::TooLarge.to_string())).await;
        }
        Err(e) => return Err(AppError::BadRequest(e.body_text())),
    };

    let notice = state
        .controller
        .select_file(candidate)
        .await
        .err()
        .map(|e| e.user_message());
    render_page(&state, notice).await
}

/// POST /resume/parse
pub async fn parse_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    // Transport and application failures already replaced the results area.
    let notice = match state.controller.parse_selected().await {
        Ok(()) => None,
        Err(ActionError::Validation(e)) => Some(e.to_string()),
        Err(ActionError::Transport(_) | ActionError::Application(_)) => None,
    };
    render_page(&state, notice).await
}

/// POST /resume/reset
pub async fn reset_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.controller.reset_file().await;
    render_page(&state, None).await
}

async fn render_page(state: &AppState, notice: Option<String>) -> Result<Html<String>, AppError> {
    let view = state.controller.resume_view().await;
    let page = ResumePage::new(&view, state.controller.resume_busy(), notice);
    Ok(Html(page.render()?))
}

/// Collects the upload parts. A missing file part yields an empty candidate,
/// which selection rejects as "no file".
async fn read_candidate(multipart: &mut Multipart) -> Result<FileCandidate, MultipartError> {
    let mut candidate = FileCandidate {
        name: String::new(),
        mime_type: String::new(),
        contents: Bytes::new(),
        source: FileSource::Picker,
    };

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                candidate.name = field.file_name().unwrap_or_default().to_string();
                candidate.mime_type = field.content_type().unwrap_or_default().to_string();
                candidate.contents = field.bytes().await?;
            }
            Some(SOURCE_FIELD) => {
                candidate.source = FileSource::from_form_value(&field.text().await?);
            }
            _ => {}
        }
    }

    Ok(candidate)
}
