// Rust guideline compliant 2026-10-16

//! Shared domain types for the fraud-check client.
//!
//! Defines the editable form state (`TransactionInput`), the coerced outbound
//! record (`PredictionRequest`), the parsed response (`PredictionResult`), the
//! submission lifecycle (`SubmissionState`), the error taxonomy, and the
//! hexagonal `PredictionService` port.
//! All components depend on this crate; no other workspace crate is imported here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

// ---------------------------------------------------------------------------
// FormField
// ---------------------------------------------------------------------------

/// One of the 8 required attributes of the transaction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Transaction amount (numeric).
    Amount,
    /// Age of the card holder (integer).
    CustomerAge,
    /// Hour of day the transaction happened, `0..=23`.
    Hour,
    /// Kind of transaction (e.g. purchase, transfer).
    TransactionType,
    /// Merchant category (e.g. grocery, travel).
    MerchantCategory,
    /// Card type (e.g. debit, credit).
    CardType,
    /// Country the transaction originates from.
    Country,
    /// Device used for the transaction (e.g. web, mobile).
    Device,
}

impl FormField {
    /// All fields in form order.
    pub const ALL: [Self; 8] = [
        Self::Amount,
        Self::CustomerAge,
        Self::Hour,
        Self::TransactionType,
        Self::MerchantCategory,
        Self::CardType,
        Self::Country,
        Self::Device,
    ];

    /// Wire name, as sent to the prediction service.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::CustomerAge => "customer_age",
            Self::Hour => "hour",
            Self::TransactionType => "transaction_type",
            Self::MerchantCategory => "merchant_category",
            Self::CardType => "card_type",
            Self::Country => "country",
            Self::Device => "device",
        }
    }

    /// Operator-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Amount => "Amount",
            Self::CustomerAge => "Customer Age",
            Self::Hour => "Hour (0-23)",
            Self::TransactionType => "Transaction Type",
            Self::MerchantCategory => "Merchant Category",
            Self::CardType => "Card Type",
            Self::Country => "Country",
            Self::Device => "Device",
        }
    }

    /// `true` for the three fields coerced to numbers at submit time.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Amount | Self::CustomerAge | Self::Hour)
    }

    /// Known option values for the categorical fields of the reference deployment.
    ///
    /// Hints for the operator surface only: membership is never enforced,
    /// since the accepted sets are defined by the deployed model. Numeric
    /// fields return an empty slice.
    #[must_use]
    pub const fn options(self) -> &'static [&'static str] {
        match self {
            Self::Amount | Self::CustomerAge | Self::Hour => &[],
            Self::TransactionType => &["purchase", "transfer"],
            Self::MerchantCategory => &["grocery", "telecom", "travel", "unknown"],
            Self::CardType => &["debit", "credit"],
            Self::Country => &["somalia", "kenya", "ethiopia", "djibouti"],
            Self::Device => &["web", "mobile"],
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField { name: s.to_owned() })
    }
}

/// A field name outside the fixed 8-field schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {name:?}")]
pub struct UnknownField {
    /// The rejected name.
    pub name: String,
}

// ---------------------------------------------------------------------------
// TransactionInput
// ---------------------------------------------------------------------------

/// Untrusted, in-progress form state.
///
/// Every field stays a `String` while editing; numeric fields are coerced
/// only when a [`PredictionRequest`] is built at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionInput {
    /// Raw amount text.
    pub amount: String,
    /// Raw customer age text.
    pub customer_age: String,
    /// Raw hour text.
    pub hour: String,
    /// Transaction type option value.
    pub transaction_type: String,
    /// Merchant category option value.
    pub merchant_category: String,
    /// Card type option value.
    pub card_type: String,
    /// Country option value.
    pub country: String,
    /// Device option value.
    pub device: String,
}

impl TransactionInput {
    /// Create an input with all 8 fields empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of `field`.
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Amount => &self.amount,
            FormField::CustomerAge => &self.customer_age,
            FormField::Hour => &self.hour,
            FormField::TransactionType => &self.transaction_type,
            FormField::MerchantCategory => &self.merchant_category,
            FormField::CardType => &self.card_type,
            FormField::Country => &self.country,
            FormField::Device => &self.device,
        }
    }

    /// Overwrite `field` with `value`, leaving the other fields untouched.
    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Amount => &mut self.amount,
            FormField::CustomerAge => &mut self.customer_age,
            FormField::Hour => &mut self.hour,
            FormField::TransactionType => &mut self.transaction_type,
            FormField::MerchantCategory => &mut self.merchant_category,
            FormField::CardType => &mut self.card_type,
            FormField::Country => &mut self.country,
            FormField::Device => &mut self.device,
        };
        *slot = value;
    }

    /// Fields that are still the empty string, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// `true` when none of the 8 fields is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        FormField::ALL.into_iter().all(|field| !self.get(field).is_empty())
    }
}

// ---------------------------------------------------------------------------
// PredictionRequest / PredictionResult
// ---------------------------------------------------------------------------

/// The outbound `POST /predict` body, numeric fields already coerced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    /// Amount; sign is not checked.
    pub amount: f64,
    /// Customer age in years.
    pub customer_age: u32,
    /// Hour of day, `0..=23`.
    pub hour: u8,
    /// Passed through unchanged.
    pub transaction_type: String,
    /// Passed through unchanged.
    pub merchant_category: String,
    /// Passed through unchanged.
    pub card_type: String,
    /// Passed through unchanged.
    pub country: String,
    /// Passed through unchanged.
    pub device: String,
}

/// A validated prediction returned by the service.
///
/// Fields are private so the invariants below hold for every instance:
/// `fraud_probability` is finite and within `[0.0, 1.0]`, and `risk_level`
/// is a non-empty lowercase label.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    fraud_probability: f64,
    risk_level: String,
    is_fraud: Option<bool>,
}

/// Wire shape of a successful response, before validation.
#[derive(Debug, Deserialize)]
struct RawPrediction {
    fraud_probability: f64,
    risk_level: String,
    #[serde(default)]
    is_fraud: Option<FraudFlag>,
}

/// The reference service encodes the verdict as `0`/`1`; booleans are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FraudFlag {
    Bool(bool),
    Int(i64),
}

impl PredictionResult {
    /// Build a result, normalizing `risk_level` to lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`PredictionError::MalformedBody`] when the probability is not
    /// a finite number in `[0, 1]` or the risk label is blank.
    pub fn new(
        fraud_probability: f64,
        risk_level: &str,
        is_fraud: Option<bool>,
    ) -> Result<Self, PredictionError> {
        if !fraud_probability.is_finite() || !(0.0..=1.0).contains(&fraud_probability) {
            return Err(PredictionError::MalformedBody {
                reason: format!("fraud_probability {fraud_probability} outside [0, 1]"),
            });
        }
        let risk_level = risk_level.trim().to_lowercase();
        if risk_level.is_empty() {
            return Err(PredictionError::MalformedBody {
                reason: "risk_level is empty".to_owned(),
            });
        }
        Ok(Self { fraud_probability, risk_level, is_fraud })
    }

    /// Parse and validate a response body. Any other shape fails closed.
    ///
    /// # Errors
    ///
    /// Returns [`PredictionError::MalformedBody`] when the body is not the
    /// expected JSON object or violates the result invariants.
    pub fn from_json(body: &[u8]) -> Result<Self, PredictionError> {
        let raw: RawPrediction =
            serde_json::from_slice(body).map_err(|e| PredictionError::MalformedBody {
                reason: e.to_string(),
            })?;
        let is_fraud = match raw.is_fraud {
            None => None,
            Some(FraudFlag::Bool(b)) => Some(b),
            Some(FraudFlag::Int(0)) => Some(false),
            Some(FraudFlag::Int(1)) => Some(true),
            Some(FraudFlag::Int(other)) => {
                return Err(PredictionError::MalformedBody {
                    reason: format!("is_fraud must be 0 or 1, got {other}"),
                });
            }
        };
        Self::new(raw.fraud_probability, &raw.risk_level, is_fraud)
    }

    /// Estimated fraud likelihood in `[0, 1]`.
    #[must_use]
    pub fn fraud_probability(&self) -> f64 {
        self.fraud_probability
    }

    /// Lowercase tier label (e.g. `"low"`).
    #[must_use]
    pub fn risk_level(&self) -> &str {
        &self.risk_level
    }

    /// Verdict flag, when the service sent one.
    #[must_use]
    pub fn is_fraud(&self) -> Option<bool> {
        self.is_fraud
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Input rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more required fields are empty.
    #[error("Please fill all fields")]
    MissingFields {
        /// The empty fields, in form order.
        fields: Vec<FormField>,
    },
    /// A numeric field does not hold a usable number.
    #[error("Please enter a valid number for {}", .field.label())]
    NotNumeric {
        /// The offending field.
        field: FormField,
    },
}

/// Errors from the `PredictionService` port.
///
/// The variants exist for logs; the UI only ever sees the collapsed
/// [`SubmitError::Transport`] message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictionError {
    /// The request never produced a response.
    #[error("network failure: {reason}")]
    Network {
        /// Human-readable description.
        reason: String,
    },
    /// The service answered with a non-2xx status.
    #[error("unexpected status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// The response body is not a valid prediction.
    #[error("malformed response body: {reason}")]
    MalformedBody {
        /// Human-readable description.
        reason: String,
    },
    /// No response within the configured bound.
    #[error("no response after {after:?}")]
    Timeout {
        /// The bound that elapsed.
        after: Duration,
    },
}

/// Outcome of a failed submit attempt, as held by [`SubmissionState::Failed`].
///
/// `Display` yields the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Input incomplete or unusable; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The request failed; every cause shares one message.
    #[error("Failed to get prediction")]
    Transport(#[source] PredictionError),
    /// A request is already in flight. Never stored in the state.
    #[error("a prediction request is already in flight")]
    AlreadySubmitting,
}

impl From<PredictionError> for SubmitError {
    fn from(err: PredictionError) -> Self {
        Self::Transport(err)
    }
}

// ---------------------------------------------------------------------------
// SubmissionState
// ---------------------------------------------------------------------------

/// Lifecycle of the single prediction request of a form session.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    /// Nothing in flight, nothing to show.
    #[default]
    Idle,
    /// Completeness check running. Entered and left synchronously within `submit`.
    Validating,
    /// Request dispatched, awaiting the service.
    Submitting,
    /// Last attempt produced a result.
    Succeeded(PredictionResult),
    /// Last attempt failed; the form fields are preserved.
    Failed(SubmitError),
}

impl SubmissionState {
    /// `true` while a request is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether the submit action should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !matches!(self, Self::Submitting | Self::Validating)
    }

    /// The held result, if the last attempt succeeded.
    #[must_use]
    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// The held error, if the last attempt failed.
    #[must_use]
    pub fn error(&self) -> Option<&SubmitError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// User-facing error text, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    /// Drop a displayed error (`Failed` → `Idle`); any other state is kept.
    pub fn dismiss_error(&mut self) {
        if matches!(self, Self::Failed(_)) {
            *self = Self::Idle;
        }
    }

    /// Return to `Idle`, discarding any result or error.
    ///
    /// An in-flight request cannot be cancelled, so `Submitting` is kept.
    pub fn clear(&mut self) {
        if !self.is_submitting() {
            *self = Self::Idle;
        }
    }
}

// ---------------------------------------------------------------------------
// Port
// ---------------------------------------------------------------------------

/// Hexagonal port: the external fraud-scoring service.
///
/// Implemented by adapters in the binary crate (HTTP, demo). The Submission
/// Controller depends exclusively on this trait -- never on a concrete adapter.
#[expect(
    async_fn_in_trait,
    reason = "no dyn dispatch needed; internal workspace only"
)]
pub trait PredictionService {
    /// Score one transaction.
    ///
    /// # Errors
    ///
    /// Returns a [`PredictionError`] describing why no valid result was obtained.
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, PredictionError>;
}
