// Rust guideline compliant 2026-10-16

//! HTTP adapter for the `PredictionService` port.
//!
//! Sends `POST {base_url}/predict` with the coerced request as JSON and
//! parses the body through `PredictionResult::from_json`. Connection and I/O
//! failures map to `PredictionError::Network`, non-2xx answers to
//! `PredictionError::Status`, and any other body shape to
//! `PredictionError::MalformedBody`.

use domain::{PredictionError, PredictionRequest, PredictionResult, PredictionService};
use serde::Deserialize;
use std::time::Duration;

/// Body of the service's root endpoint.
#[derive(Debug, Deserialize)]
struct HealthStatus {
    status: String,
}

/// `PredictionService` adapter talking to a remote scoring service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPredictionService {
    client: reqwest::Client,
    base_url: String,
    health_timeout: Option<Duration>,
}

impl HttpPredictionService {
    /// Create an adapter for the service at `base_url`.
    ///
    /// A trailing `/` is ignored.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            health_timeout: None,
        }
    }

    /// Bound [`health`](Self::health) by `timeout`. Prediction calls are
    /// bounded by the controller instead.
    #[must_use]
    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = Some(timeout);
        self
    }

    /// Normalised base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Probe the service root and return its status text.
    ///
    /// # Errors
    ///
    /// Same mapping as [`PredictionService::predict`]. An unanswered probe
    /// fails with [`PredictionError::Timeout`] once the health timeout elapses.
    pub async fn health(&self) -> Result<String, PredictionError> {
        match self.health_timeout {
            Some(after) => tokio::time::timeout(after, self.probe_root())
                .await
                .map_err(|_elapsed| PredictionError::Timeout { after })?,
            None => self.probe_root().await,
        }
    }

    async fn probe_root(&self) -> Result<String, PredictionError> {
        let url = self.endpoint("");
        tracing::debug!(%url, "http_prediction.health");
        let response = self.client.get(&url).send().await.map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::Status { status: status.as_u16() });
        }
        let health: HealthStatus = response.json().await.map_err(|e| {
            PredictionError::MalformedBody { reason: e.to_string() }
        })?;
        Ok(health.status)
    }
}

impl PredictionService for HttpPredictionService {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, PredictionError> {
        let url = self.endpoint("predict");
        tracing::debug!(%url, "http_prediction.request");
        let response = self.client.post(&url).json(request).send().await.map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "http_prediction.rejected");
            return Err(PredictionError::Status { status: status.as_u16() });
        }
        let body = response.bytes().await.map_err(network)?;
        PredictionResult::from_json(&body)
    }
}

fn network(err: reqwest::Error) -> PredictionError {
    PredictionError::Network { reason: err.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    /// Serve `app` on an ephemeral local port and return its base URL.
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn request() -> PredictionRequest {
        PredictionRequest {
            amount: 120.5,
            customer_age: 34,
            hour: 13,
            transaction_type: "purchase".to_owned(),
            merchant_category: "grocery".to_owned(),
            card_type: "debit".to_owned(),
            country: "kenya".to_owned(),
            device: "web".to_owned(),
        }
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let service = HttpPredictionService::new("http://localhost:8000/");
        assert_eq!(service.base_url(), "http://localhost:8000");
        assert_eq!(service.endpoint("predict"), "http://localhost:8000/predict");
    }

    #[tokio::test]
    async fn posts_json_and_parses_reference_answer() {
        let seen: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(vec![]));
        let recorder = Arc::clone(&seen);
        let app = Router::new().route(
            "/predict",
            post(move |Json(body): Json<Value>| {
                let recorder = Arc::clone(&recorder);
                async move {
                    recorder.lock().unwrap().push(body);
                    Json(json!({"fraud_probability": 0.12, "is_fraud": 0, "risk_level": "LOW"}))
                }
            }),
        );
        let service = HttpPredictionService::new(&serve(app).await);

        let result = service.predict(&request()).await.unwrap();
        assert_eq!(result.risk_level(), "low");
        assert_eq!(result.is_fraud(), Some(false));

        let bodies = seen.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["amount"], json!(120.5));
        assert_eq!(bodies[0]["customer_age"], json!(34));
        assert_eq!(bodies[0]["hour"], json!(13));
        assert_eq!(bodies[0]["country"], json!("kenya"));
        assert_eq!(bodies[0]["device"], json!("web"));
    }

    #[tokio::test]
    async fn server_error_maps_to_status() {
        let app = Router::new().route(
            "/predict",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let service = HttpPredictionService::new(&serve(app).await);
        let err = service.predict(&request()).await.unwrap_err();
        assert_eq!(err, PredictionError::Status { status: 500 });
    }

    #[tokio::test]
    async fn unexpected_shape_maps_to_malformed_body() {
        let app = Router::new().route(
            "/predict",
            post(|| async { Json(json!({"prediction": "fraud"})) }),
        );
        let service = HttpPredictionService::new(&serve(app).await);
        let err = service.predict(&request()).await.unwrap_err();
        assert!(matches!(err, PredictionError::MalformedBody { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn refused_connection_maps_to_network() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let service = HttpPredictionService::new(&format!("http://{addr}"));
        let err = service.predict(&request()).await.unwrap_err();
        assert!(matches!(err, PredictionError::Network { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn health_reads_status_text() {
        let app = Router::new().route(
            "/",
            get(|| async { Json(json!({"status": "Fraud Detection API running"})) }),
        );
        let service = HttpPredictionService::new(&serve(app).await);
        assert_eq!(service.health().await.unwrap(), "Fraud Detection API running");
    }

    #[tokio::test]
    async fn silent_health_endpoint_times_out() {
        let app = Router::new().route("/", get(|| std::future::pending::<String>()));
        let after = Duration::from_millis(50);
        let service = HttpPredictionService::new(&serve(app).await).with_health_timeout(after);
        assert_eq!(service.health().await.unwrap_err(), PredictionError::Timeout { after });
    }
}
