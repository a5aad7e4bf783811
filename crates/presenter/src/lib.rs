// Rust guideline compliant 2026-10-16

//! Risk Presenter -- pure mapping from a [`PredictionResult`] to display
//! parameters.
//!
//! Every function here is total: unknown tier labels map to a neutral
//! colour and out-of-range probabilities are clamped, never rejected.

use domain::PredictionResult;

// ---------------------------------------------------------------------------
// RiskTier / TierColor
// ---------------------------------------------------------------------------

/// Discrete risk tier, ordered by intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskTier {
    /// Label not recognised.
    Unknown,
    /// `"low"`.
    Low,
    /// `"medium"`.
    Medium,
    /// `"high"`.
    High,
}

impl RiskTier {
    /// Case-insensitive lookup; anything unrecognised is [`RiskTier::Unknown`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }
}

/// Colour family used to render a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierColor {
    /// Low risk.
    Green,
    /// Medium risk.
    Yellow,
    /// High risk.
    Red,
    /// Neutral default.
    Gray,
}

impl TierColor {
    /// Lowercase colour name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }
}

/// Badge colour for a tier label: low → green, medium → yellow, high → red,
/// anything else → gray.
#[must_use]
pub fn tier_color(risk_level: &str) -> TierColor {
    match RiskTier::from_label(risk_level) {
        RiskTier::Low => TierColor::Green,
        RiskTier::Medium => TierColor::Yellow,
        RiskTier::High => TierColor::Red,
        RiskTier::Unknown => TierColor::Gray,
    }
}

/// Bar colour for a tier label. Unlike the badge, an unknown tier is drawn red.
#[must_use]
pub fn bar_color(risk_level: &str) -> TierColor {
    match RiskTier::from_label(risk_level) {
        RiskTier::Low => TierColor::Green,
        RiskTier::Medium => TierColor::Yellow,
        RiskTier::High | RiskTier::Unknown => TierColor::Red,
    }
}

// ---------------------------------------------------------------------------
// Probability formatting
// ---------------------------------------------------------------------------

/// Bar width as a percentage, clamped to `[0, 100]`. NaN renders as empty.
#[must_use]
pub fn bar_fill_ratio(fraud_probability: f64) -> f64 {
    let percent = fraud_probability * 100.0;
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

/// Probability as a percentage with exactly one decimal place (`0.873` → `"87.3%"`).
///
/// Ties round up (`0.0125` → `"1.3%"`) and negative zero prints as `"0.0%"`.
#[must_use]
pub fn format_percentage(fraud_probability: f64) -> String {
    let tenths = (fraud_probability * 1000.0).round();
    // `+ 0.0` turns -0.0 into 0.0.
    format!("{:.1}%", tenths / 10.0 + 0.0)
}

// ---------------------------------------------------------------------------
// RiskDisplay
// ---------------------------------------------------------------------------

/// Everything the result region needs, computed once per result.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskDisplay {
    /// Parsed tier.
    pub tier: RiskTier,
    /// Tier label with each word capitalised (`"low"` → `"Low"`).
    pub label: String,
    /// Badge colour.
    pub tier_color: TierColor,
    /// Indicator bar colour.
    pub bar_color: TierColor,
    /// Formatted probability, e.g. `"12.0%"`.
    pub percentage: String,
    /// Bar width in `[0, 100]`.
    pub fill_ratio: f64,
    /// Verdict flag passed through from the result.
    pub is_fraud: Option<bool>,
}

impl RiskDisplay {
    /// Text rendering of the indicator bar, `width` cells wide.
    #[must_use]
    pub fn bar(&self, width: u32) -> String {
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "value is rounded and bounded by width"
        )]
        let filled = (f64::from(width) * self.fill_ratio / 100.0).round() as usize;
        let width = width as usize;
        let filled = filled.min(width);
        format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
    }
}

/// Compute display parameters for `result`.
#[must_use]
pub fn render(result: &PredictionResult) -> RiskDisplay {
    let risk_level = result.risk_level();
    RiskDisplay {
        tier: RiskTier::from_label(risk_level),
        label: capitalize(risk_level),
        tier_color: tier_color(risk_level),
        bar_color: bar_color(risk_level),
        percentage: format_percentage(result.fraud_probability()),
        fill_ratio: bar_fill_ratio(result.fraud_probability()),
        is_fraud: result.is_fraud(),
    }
}

fn capitalize(label: &str) -> String {
    label
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
