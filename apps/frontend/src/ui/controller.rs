//! The page controller: owns what the two front-ends show between requests.
//!
//! Built once at startup and shared through `AppState`. Each action runs
//! collect → validate → call → render, and the mutexes are never held across
//! a collaborator call.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api_client::Backend;
use crate::errors::ActionError;
use crate::input::{FileCandidate, NumericInputPair, SelectedFile, ValidationError};
use crate::models::calculator::HealthStatus;
use crate::render::{render_resume, ResultLine};

/// One-at-a-time gate for an action. Holding the guard means "busy".
#[derive(Debug, Default)]
pub struct BusyFlag(AtomicBool);

impl BusyFlag {
    /// Enters the busy state, or `None` if the action is already running.
    pub fn try_begin(&self) -> Option<BusyGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(&self.0))
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Leaves the busy state when dropped, whichever way the action ended.
#[derive(Debug)]
pub struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// What the resume results area shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResumeOutput {
    #[default]
    Empty,
    Rendered(String),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct ResumeView {
    pub selected: Option<SelectedFile>,
    pub output: ResumeOutput,
}

#[derive(Debug, Clone, Default)]
pub struct CalculatorView {
    pub fields: NumericInputPair,
    pub result: ResultLine,
}

/// The resume view plus a counter bumped on every selection change, so a parse
/// that outlives its selection can tell its result is stale.
#[derive(Debug, Default)]
struct ResumeState {
    view: ResumeView,
    generation: u64,
}

impl ResumeState {
    fn replace(&mut self, view: ResumeView) {
        self.view = view;
        self.generation += 1;
    }
}

pub struct UiController {
    backend: Arc<dyn Backend>,
    resume: Mutex<ResumeState>,
    calculator: Mutex<CalculatorView>,
    resume_busy: BusyFlag,
    calculator_busy: BusyFlag,
}

impl UiController {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            resume: Mutex::new(ResumeState::default()),
            calculator: Mutex::new(CalculatorView::default()),
            resume_busy: BusyFlag::default(),
            calculator_busy: BusyFlag::default(),
        }
    }

    /// Picker or drop. A rejected candidate leaves the current selection and output untouched.
    pub async fn select_file(&self, candidate: FileCandidate) -> Result<(), ActionError> {
        let (name, size, source) = (
            candidate.name.clone(),
            candidate.contents.len(),
            candidate.source,
        );

        let file = SelectedFile::try_from(candidate).map_err(|e| {
            warn!("Rejected file '{name}' ({size} bytes, via {source}): {e}");
            e
        })?;

        info!("Selected file '{name}' ({size} bytes, via {source})");
        self.resume.lock().await.replace(ResumeView {
            selected: Some(file),
            output: ResumeOutput::Empty,
        });
        Ok(())
    }

    pub async fn reset_file(&self) {
        self.resume.lock().await.replace(ResumeView::default());
        info!("Resume selection cleared");
    }

    /// Uploads the selected file and replaces the results area with the outcome.
    pub async fn parse_selected(&self) -> Result<(), ActionError> {
        let action_id = Uuid::new_v4();
        let Some(_busy) = self.resume_busy.try_begin() else {
            warn!(%action_id, "Resume parse requested while another is in flight");
            return Err(ValidationError::Busy.into());
        };

        let (file, generation) = {
            let state = self.resume.lock().await;
            let file = state
                .view
                .selected
                .clone()
                .ok_or(ValidationError::NothingSelected)?;
            (file, state.generation)
        };

        info!(
            %action_id,
            "Submitting '{}' ({} bytes, via {})",
            file.name(),
            file.size(),
            file.source()
        );
        let outcome = self.backend.parse_resume(&file).await;

        let mut state = self.resume.lock().await;
        if state.generation != generation {
            info!(%action_id, "Selection changed while parsing; discarding result");
            return Ok(());
        }
        let view = &mut state.view;
        match outcome {
            Ok(data) => {
                view.output = ResumeOutput::Rendered(render_resume(&data));
                info!(%action_id, "Resume rendered");
                Ok(())
            }
            Err(e) => {
                log_failure(action_id, &e);
                view.output = ResumeOutput::Failed(e.user_message());
                Err(e)
            }
        }
    }

    /// Keystroke path: sanitizes and stores both fields.
    pub async fn read_number_pair(&self, raw_a: &str, raw_b: &str) -> NumericInputPair {
        let pair = NumericInputPair::read(raw_a, raw_b);
        self.calculator.lock().await.fields = pair.clone();
        pair
    }

    /// Sends the stored pair and replaces the result line with the outcome.
    pub async fn calculate(&self) -> Result<f64, ActionError> {
        let action_id = Uuid::new_v4();
        let Some(_busy) = self.calculator_busy.try_begin() else {
            warn!(%action_id, "Calculation requested while another is in flight");
            return Err(ValidationError::Busy.into());
        };

        let fields = self.calculator.lock().await.fields.clone();
        let outcome = match fields.parsed() {
            Ok((a, b)) => {
                info!(%action_id, "Adding {a} + {b}");
                self.backend.add(a, b).await
            }
            Err(e) => Err(e.into()),
        };

        let mut view = self.calculator.lock().await;
        match outcome {
            Ok(value) => {
                view.result = ResultLine::Value(value);
                info!(%action_id, "Result: {value}");
                Ok(value)
            }
            Err(e) => {
                log_failure(action_id, &e);
                view.result = ResultLine::Error(e.user_message());
                Err(e)
            }
        }
    }

    pub async fn backend_health(&self) -> Result<HealthStatus, ActionError> {
        self.backend.health().await
    }

    pub async fn resume_view(&self) -> ResumeView {
        self.resume.lock().await.view.clone()
    }

    pub async fn calculator_view(&self) -> CalculatorView {
        self.calculator.lock().await.clone()
    }

    pub fn resume_busy(&self) -> bool {
        self.resume_busy.is_busy()
    }

    pub fn calculator_busy(&self) -> bool {
        self.calculator_busy.is_busy()
    }
}

fn log_failure(action_id: Uuid, e: &ActionError) {
    match e {
        ActionError::Transport(inner) => error!(%action_id, "Collaborator unreachable: {inner}"),
        ActionError::Validation(_) | ActionError::Application(_) => {
            warn!(%action_id, "Action failed: {e}")
        }
    }
}
