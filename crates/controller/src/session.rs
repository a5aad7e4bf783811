// Rust guideline compliant 2026-10-16

//! One form session: an [`InputCollector`] wired to a [`SubmissionController`].

use crate::SubmissionController;
use collector::InputCollector;
use domain::{
    FormField, PredictionResult, PredictionService, SubmissionState, SubmitError,
    TransactionInput, UnknownField,
};
use presenter::RiskDisplay;
use std::cell::RefCell;

/// Form state plus submission lifecycle for a single operator session.
///
/// The controller owns the [`SubmissionState`]; edits borrow it mutably for
/// the duration of the call only, so fields stay editable while a request
/// is in flight.
#[derive(Debug)]
pub struct FormSession<P: PredictionService> {
    collector: RefCell<InputCollector>,
    controller: SubmissionController<P>,
}

impl<P: PredictionService> FormSession<P> {
    /// Start a session with an empty form.
    #[must_use]
    pub fn new(controller: SubmissionController<P>) -> Self {
        Self {
            collector: RefCell::new(InputCollector::new()),
            controller,
        }
    }

    /// Overwrite one field; dismisses a displayed error.
    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        let mut state = self.controller.state_mut();
        self.collector.borrow_mut().set_field(field, value, &mut state);
    }

    /// Overwrite one field by wire name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownField`] for a name outside the schema.
    pub fn set_field_by_name(
        &self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownField> {
        let mut state = self.controller.state_mut();
        self.collector.borrow_mut().set_field_by_name(name, value, &mut state)
    }

    /// Submit the current field values.
    ///
    /// # Errors
    ///
    /// See [`SubmissionController::submit`].
    pub async fn submit(&self) -> Result<PredictionResult, SubmitError> {
        let input = self.collector.borrow().input().clone();
        self.controller.submit(&input).await
    }

    /// Empty the form and clear any result or error.
    pub fn reset(&self) {
        let mut state = self.controller.state_mut();
        self.collector.borrow_mut().reset(&mut state);
    }

    /// Snapshot of the current field values.
    #[must_use]
    pub fn input(&self) -> TransactionInput {
        self.collector.borrow().input().clone()
    }

    /// Snapshot of the submission state.
    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.controller.state()
    }

    /// Whether the submit action should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.controller.is_submitting()
    }

    /// Display parameters for the result region, shown only after a success.
    #[must_use]
    pub fn display(&self) -> Option<RiskDisplay> {
        self.controller.state().result().map(presenter::render)
    }

    /// The underlying controller.
    #[must_use]
    pub fn controller(&self) -> &SubmissionController<P> {
        &self.controller
    }
}
