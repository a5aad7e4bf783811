// Rust guideline compliant 2026-10-16

//! Input Collector component -- holds the editable transaction form and
//! applies one field edit at a time.
//!
//! Entry points: [`InputCollector::set_field`], [`InputCollector::reset`].
//! The submission state is owned elsewhere and passed in by `&mut` so that an
//! edit can dismiss a stale error.

use domain::{FormField, SubmissionState, TransactionInput, UnknownField};

/// Editable form state for one session.
///
/// Performs no validation: any string is accepted for any field. Range and
/// type checks happen at submit time.
#[derive(Debug, Default)]
pub struct InputCollector {
    input: TransactionInput,
}

impl InputCollector {
    /// Create a collector with all 8 fields empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field values.
    #[must_use]
    pub fn input(&self) -> &TransactionInput {
        &self.input
    }

    /// Overwrite `field` with `value`.
    ///
    /// Leaves the other fields untouched. A displayed error in `state` is
    /// dismissed so it does not linger while the operator corrects input;
    /// results and in-flight requests are left alone.
    pub fn set_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
        state: &mut SubmissionState,
    ) {
        self.input.set(field, value.into());
        if state.error().is_some() {
            tracing::debug!(field = field.name(), "collector.set_field.error_dismissed");
            state.dismiss_error();
        }
    }

    /// Like [`set_field`](Self::set_field), resolving the field from its wire name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownField`] when `name` is not one of the 8 schema fields;
    /// neither the input nor `state` is modified in that case.
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
        state: &mut SubmissionState,
    ) -> Result<(), UnknownField> {
        let field: FormField = name.parse()?;
        self.set_field(field, value, state);
        Ok(())
    }

    /// Empty every field and clear any held result or error.
    ///
    /// Idempotent. An in-flight request keeps `state` at `Submitting`.
    pub fn reset(&mut self, state: &mut SubmissionState) {
        self.input = TransactionInput::new();
        state.clear();
        tracing::debug!("collector.reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{PredictionError, PredictionResult, SubmitError, ValidationError};

    fn failed() -> SubmissionState {
        SubmissionState::Failed(SubmitError::Validation(ValidationError::MissingFields {
            fields: vec![FormField::Hour],
        }))
    }

    fn filled() -> InputCollector {
        let mut collector = InputCollector::new();
        let mut state = SubmissionState::Idle;
        for (field, value) in [
            (FormField::Amount, "120.50"),
            (FormField::CustomerAge, "34"),
            (FormField::Hour, "13"),
            (FormField::TransactionType, "purchase"),
            (FormField::MerchantCategory, "grocery"),
            (FormField::CardType, "debit"),
            (FormField::Country, "kenya"),
            (FormField::Device, "web"),
        ] {
            collector.set_field(field, value, &mut state);
        }
        collector
    }

    // ------------------------------------------------------------------
    // set_field
    // ------------------------------------------------------------------

    #[test]
    fn set_field_overwrites_only_that_field() {
        let mut collector = filled();
        let before = collector.input().clone();
        let mut state = SubmissionState::Idle;
        collector.set_field(FormField::Amount, "99", &mut state);

        assert_eq!(collector.input().amount, "99");
        for field in FormField::ALL.into_iter().filter(|f| *f != FormField::Amount) {
            assert_eq!(collector.input().get(field), before.get(field), "{field} changed");
        }
    }

    #[test]
    fn set_field_accepts_partial_numeric_text() {
        let mut collector = InputCollector::new();
        let mut state = SubmissionState::Idle;
        collector.set_field(FormField::Amount, "-", &mut state);
        collector.set_field(FormField::Hour, "0", &mut state);
        collector.set_field(FormField::CustomerAge, "abc", &mut state);
        assert_eq!(collector.input().amount, "-");
        assert_eq!(collector.input().hour, "0");
        assert_eq!(collector.input().customer_age, "abc");
        assert_eq!(state, SubmissionState::Idle);
    }

    #[test]
    fn set_field_dismisses_a_stale_error() {
        let mut collector = InputCollector::new();
        let mut state = failed();
        collector.set_field(FormField::Hour, "13", &mut state);
        assert_eq!(state, SubmissionState::Idle);

        let mut state =
            SubmissionState::Failed(SubmitError::Transport(PredictionError::Status { status: 500 }));
        collector.set_field(FormField::Device, "web", &mut state);
        assert_eq!(state, SubmissionState::Idle);
    }

    #[test]
    fn set_field_keeps_result_and_in_flight_state() {
        let mut collector = InputCollector::new();
        let result = PredictionResult::new(0.12, "low", None).unwrap();
        let mut state = SubmissionState::Succeeded(result.clone());
        collector.set_field(FormField::Country, "kenya", &mut state);
        assert_eq!(state.result(), Some(&result));

        let mut state = SubmissionState::Submitting;
        collector.set_field(FormField::Country, "somalia", &mut state);
        assert!(state.is_submitting());
        assert_eq!(collector.input().country, "somalia");
    }

    #[test]
    fn set_field_by_name_resolves_wire_names() {
        let mut collector = InputCollector::new();
        let mut state = SubmissionState::Idle;
        collector.set_field_by_name("merchant_category", "travel", &mut state).unwrap();
        assert_eq!(collector.input().merchant_category, "travel");
    }

    #[test]
    fn set_field_by_name_rejects_unknown_names_without_side_effects() {
        let mut collector = filled();
        let before = collector.input().clone();
        let mut state = failed();
        let err = collector.set_field_by_name("iban", "x", &mut state).unwrap_err();
        assert_eq!(err.name, "iban");
        assert_eq!(collector.input(), &before);
        assert!(state.error().is_some(), "error must stay when nothing was edited");
    }

    // ------------------------------------------------------------------
    // reset
    // ------------------------------------------------------------------

    #[test]
    fn reset_is_idempotent() {
        let mut collector = filled();
        let mut state = SubmissionState::Succeeded(PredictionResult::new(0.9, "high", None).unwrap());

        collector.reset(&mut state);
        assert_eq!(collector.input(), &TransactionInput::new());
        assert_eq!(state, SubmissionState::Idle);

        collector.reset(&mut state);
        assert_eq!(collector.input(), &TransactionInput::new());
        assert_eq!(state, SubmissionState::Idle);
    }

    #[test]
    fn reset_clears_errors() {
        let mut collector = filled();
        let mut state = failed();
        collector.reset(&mut state);
        assert_eq!(state, SubmissionState::Idle);
        assert!(!collector.input().is_complete());
    }

    #[test]
    fn reset_while_submitting_empties_fields_but_keeps_request() {
        let mut collector = filled();
        let mut state = SubmissionState::Submitting;
        collector.reset(&mut state);
        assert_eq!(collector.input(), &TransactionInput::new());
        assert!(state.is_submitting());
    }
}
