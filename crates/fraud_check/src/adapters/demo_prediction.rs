// Rust guideline compliant 2026-10-16

//! DEMO adapter for the `PredictionService` port.
//!
//! Scores transactions offline with a fixed logistic heuristic over the same
//! engineered features the reference pipeline feeds its model (log amount,
//! night hour, cross-border, web device, transfer, unknown merchant), plus a
//! small seeded jitter. Tiers use the reference thresholds: below 0.35 is
//! LOW, below 0.7 is MEDIUM, otherwise HIGH.

use std::cell::RefCell;

use domain::{PredictionError, PredictionRequest, PredictionResult, PredictionService};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Probability at and above which a transaction is flagged.
const FRAUD_THRESHOLD: f64 = 0.35;
/// Lower bound of the HIGH tier.
const HIGH_THRESHOLD: f64 = 0.7;
/// Country treated as domestic; every other country counts as cross-border.
const HOME_COUNTRY: &str = "somalia";
/// Half-width of the uniform noise added to the logit.
const JITTER: f64 = 0.25;

/// Offline stand-in for the scoring service.
#[derive(Debug)]
pub struct DemoPredictionService {
    /// Interior mutability required because `predict` takes `&self`.
    rng: RefCell<StdRng>,
}

impl DemoPredictionService {
    /// Create a demo service.
    ///
    /// `seed = Some(s)` produces deterministic scores; `None` seeds from the OS.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self { rng: RefCell::new(rng) }
    }
}

/// Logit of the heuristic score, before jitter.
fn base_logit(request: &PredictionRequest) -> f64 {
    let mut logit = -2.0;
    logit += 0.35 * (request.amount.max(0.0).ln_1p() - 4.0);
    if request.hour <= 5 {
        logit += 1.2;
    }
    if request.country != HOME_COUNTRY {
        logit += 0.6;
    }
    if request.device == "web" {
        logit += 0.4;
    }
    if request.transaction_type == "transfer" {
        logit += 0.8;
    }
    if request.merchant_category == "unknown" {
        logit += 0.5;
    }
    logit
}

/// Reference tier label for probability `p`.
fn risk_label(p: f64) -> &'static str {
    if p < FRAUD_THRESHOLD {
        "LOW"
    } else if p < HIGH_THRESHOLD {
        "MEDIUM"
    } else {
        "HIGH"
    }
}

impl PredictionService for DemoPredictionService {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, PredictionError> {
        let noise: f64 = self.rng.borrow_mut().random_range(-JITTER..=JITTER);
        let logit = base_logit(request) + noise;
        let p = 1.0 / (1.0 + (-logit).exp());
        // Four decimals, as the reference service rounds.
        let p = (p * 10_000.0).round() / 10_000.0;
        tracing::debug!(fraud_probability = p, "demo_prediction.scored");
        PredictionResult::new(p, risk_label(p), Some(p >= FRAUD_THRESHOLD))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daytime_purchase() -> PredictionRequest {
        PredictionRequest {
            amount: 120.5,
            customer_age: 34,
            hour: 13,
            transaction_type: "purchase".to_owned(),
            merchant_category: "grocery".to_owned(),
            card_type: "debit".to_owned(),
            country: "somalia".to_owned(),
            device: "mobile".to_owned(),
        }
    }

    fn night_transfer() -> PredictionRequest {
        PredictionRequest {
            amount: 9_500.0,
            hour: 3,
            transaction_type: "transfer".to_owned(),
            merchant_category: "unknown".to_owned(),
            country: "kenya".to_owned(),
            device: "web".to_owned(),
            ..daytime_purchase()
        }
    }

    #[test]
    fn risk_label_uses_reference_thresholds() {
        assert_eq!(risk_label(0.0), "LOW");
        assert_eq!(risk_label(0.3499), "LOW");
        assert_eq!(risk_label(0.35), "MEDIUM");
        assert_eq!(risk_label(0.6999), "MEDIUM");
        assert_eq!(risk_label(0.7), "HIGH");
        assert_eq!(risk_label(1.0), "HIGH");
    }

    #[test]
    fn risky_features_raise_the_logit() {
        assert!(base_logit(&night_transfer()) > base_logit(&daytime_purchase()) + 2.0 * JITTER);
    }

    #[tokio::test]
    async fn seeded_scores_are_deterministic() {
        let a = DemoPredictionService::new(Some(42));
        let b = DemoPredictionService::new(Some(42));
        for _ in 0..20 {
            let ra = a.predict(&night_transfer()).await.unwrap();
            let rb = b.predict(&night_transfer()).await.unwrap();
            assert_eq!(ra, rb, "identical seeds must produce identical scores");
        }
    }

    #[tokio::test]
    async fn results_are_consistent_with_thresholds() {
        let service = DemoPredictionService::new(Some(7));
        for request in [daytime_purchase(), night_transfer()] {
            for _ in 0..50 {
                let result = service.predict(&request).await.unwrap();
                let p = result.fraud_probability();
                assert!((0.0..=1.0).contains(&p));
                assert_eq!(result.risk_level(), risk_label(p).to_lowercase());
                assert_eq!(result.is_fraud(), Some(p >= FRAUD_THRESHOLD));
            }
        }
    }

    #[tokio::test]
    async fn daytime_purchase_is_low_risk() {
        let service = DemoPredictionService::new(Some(1));
        let result = service.predict(&daytime_purchase()).await.unwrap();
        assert_eq!(result.risk_level(), "low");
    }

    #[tokio::test]
    async fn negative_amount_still_scores() {
        let service = DemoPredictionService::new(Some(3));
        let request = PredictionRequest { amount: -50.0, ..daytime_purchase() };
        assert!(service.predict(&request).await.is_ok());
    }
}
