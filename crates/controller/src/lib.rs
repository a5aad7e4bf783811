// Rust guideline compliant 2026-10-16

//! Submission Controller -- validates a transaction form, drives the single
//! in-flight prediction request through its lifecycle, and stores the outcome.
//!
//! Entry points: [`SubmissionController::submit`], [`validate`], and the
//! [`FormSession`] wrapper that pairs the controller with an input collector.
//! Configuration via [`ControllerConfig::builder`].

mod session;

pub use session::FormSession;

use domain::{
    FormField, PredictionError, PredictionRequest, PredictionResult, PredictionService,
    SubmissionState, SubmitError, TransactionInput, ValidationError,
};
use std::cell::{RefCell, RefMut};
use std::time::Duration;
use tracing::Instrument as _;

// ---------------------------------------------------------------------------
// ControllerError
// ---------------------------------------------------------------------------

/// Errors raised while setting up a controller.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// The supplied configuration is invalid.
    #[error("invalid controller configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// ControllerConfig + builder
// ---------------------------------------------------------------------------

/// Runtime configuration for a [`SubmissionController`].
///
/// Construct via [`ControllerConfig::builder`].
#[derive(Debug, Clone, Default)]
pub struct ControllerConfig {
    /// Upper bound on one prediction call. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

/// Builder for [`ControllerConfig`].
///
/// Obtain via [`ControllerConfig::builder`]; finalize with [`build`](Self::build).
#[derive(Debug, Default)]
pub struct ControllerConfigBuilder {
    timeout: Option<Duration>,
}

impl ControllerConfig {
    /// Create a builder.
    ///
    /// Default values: `timeout = None`.
    #[must_use]
    pub fn builder() -> ControllerConfigBuilder {
        ControllerConfigBuilder::default()
    }
}

impl ControllerConfigBuilder {
    /// Fail a prediction call that has not answered within `timeout`.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::InvalidConfig`] when the timeout is zero.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<ControllerConfig, ControllerError> {
        if self.timeout == Some(Duration::ZERO) {
            return Err(ControllerError::InvalidConfig {
                reason: "timeout must be > 0".to_owned(),
            });
        }
        Ok(ControllerConfig { timeout: self.timeout })
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check completeness and coerce the numeric fields of `input`.
///
/// Categorical fields are passed through unchanged. `amount` must be a
/// finite number (its sign is not checked), `customer_age` a non-negative
/// integer and `hour` an integer in `0..=23`. Surrounding whitespace is
/// ignored when parsing numbers.
///
/// # Errors
///
/// Returns [`ValidationError::MissingFields`] when any field is empty, else
/// [`ValidationError::NotNumeric`] for the first numeric field that does not parse.
pub fn validate(input: &TransactionInput) -> Result<PredictionRequest, ValidationError> {
    let missing = input.missing_fields();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { fields: missing });
    }

    let amount = input
        .amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or(ValidationError::NotNumeric { field: FormField::Amount })?;
    let customer_age = input
        .customer_age
        .trim()
        .parse::<u32>()
        .map_err(|_parse| ValidationError::NotNumeric { field: FormField::CustomerAge })?;
    let hour = input
        .hour
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|hour| *hour <= 23)
        .ok_or(ValidationError::NotNumeric { field: FormField::Hour })?;

    Ok(PredictionRequest {
        amount,
        customer_age,
        hour,
        transaction_type: input.transaction_type.clone(),
        merchant_category: input.merchant_category.clone(),
        card_type: input.card_type.clone(),
        country: input.country.clone(),
        device: input.device.clone(),
    })
}

// ---------------------------------------------------------------------------
// SubmissionController
// ---------------------------------------------------------------------------

/// Owns the [`SubmissionState`] of one form session and the
/// [`PredictionService`] it submits to.
///
/// Generic over `P: PredictionService` for zero-cost static dispatch.
/// All methods take `&self`; the state sits in a `RefCell` that is never
/// borrowed across an await, so the form stays editable while a request is
/// in flight.
#[derive(Debug)]
pub struct SubmissionController<P: PredictionService> {
    config: ControllerConfig,
    service: P,
    state: RefCell<SubmissionState>,
}

impl<P: PredictionService> SubmissionController<P> {
    /// Create an idle controller submitting to `service`.
    #[must_use]
    pub fn new(config: ControllerConfig, service: P) -> Self {
        Self {
            config,
            service,
            state: RefCell::new(SubmissionState::Idle),
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// `true` while a request is in flight; callers gate the submit action on this.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state.borrow().is_submitting()
    }

    /// The injected prediction service.
    #[must_use]
    pub fn service(&self) -> &P {
        &self.service
    }

    /// Discard any held result or error. An in-flight request is kept.
    pub fn reset(&self) {
        self.state.borrow_mut().clear();
    }

    pub(crate) fn state_mut(&self) -> RefMut<'_, SubmissionState> {
        self.state.borrow_mut()
    }

    /// Validate `input` and, if it passes, send exactly one prediction request.
    ///
    /// Any previously held result or error is discarded first. On validation
    /// failure no request is sent. Every transport failure ends in
    /// `Failed("Failed to get prediction")`; there is no retry.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::AlreadySubmitting`] when a request is in flight; the
    ///   state is left untouched.
    /// - [`SubmitError::Validation`] when `input` is incomplete or not numeric.
    /// - [`SubmitError::Transport`] when the service call fails.
    pub async fn submit(&self, input: &TransactionInput) -> Result<PredictionResult, SubmitError> {
        let request = {
            let mut state = self.state.borrow_mut();
            if !state.can_submit() {
                tracing::warn!("controller.submit.rejected: request already in flight");
                return Err(SubmitError::AlreadySubmitting);
            }
            *state = SubmissionState::Validating;
            match validate(input) {
                Ok(request) => {
                    *state = SubmissionState::Submitting;
                    request
                }
                Err(err) => {
                    tracing::info!(error = %err, "controller.submit.invalid");
                    let err = SubmitError::from(err);
                    *state = SubmissionState::Failed(err.clone());
                    return Err(err);
                }
            }
        };

        let attempt = uuid::Uuid::new_v4();
        let outcome = self
            .dispatch(&request)
            .instrument(tracing::info_span!("controller.submit", %attempt))
            .await;

        let mut state = self.state.borrow_mut();
        match outcome {
            Ok(result) => {
                tracing::info!(
                    %attempt,
                    fraud_probability = result.fraud_probability(),
                    risk_level = result.risk_level(),
                    "controller.submit.succeeded"
                );
                *state = SubmissionState::Succeeded(result.clone());
                Ok(result)
            }
            Err(cause) => {
                tracing::warn!(%attempt, error = %cause, "controller.submit.failed");
                let err = SubmitError::Transport(cause);
                *state = SubmissionState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// The single suspension point of a submit.
    async fn dispatch(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, PredictionError> {
        tracing::debug!(amount = request.amount, hour = request.hour, "controller.dispatch");
        match self.config.timeout {
            None => self.service.predict(request).await,
            Some(after) => match tokio::time::timeout(after, self.service.predict(request)).await {
                Ok(outcome) => outcome,
                Err(_elapsed) => Err(PredictionError::Timeout { after }),
            },
        }
    }
}
