use crate::models::{
    error::AppError,
    inputs::{EnvironmentalInput, FarmConfig},
    placement::Placement,
    prediction::{Prediction, PredictionPayload},
};
use serde::Deserialize;
use serde::de::DeserializeOwned;

// CONSTANTS
const BASE_URL: &str = "http://127.0.0.1:8000";
const PREDICT_FALLBACK: &str = "Prediction failed";
const PLACEMENT_FALLBACK: &str = "Placement failed";

// API CONFIGURATION
/// Configuration for the crop prediction service client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Base URL of the backend service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the crop prediction endpoint.
    pub fn predict_url(&self) -> String {
        format!("{}/predict/", self.base_url)
    }

    /// Full URL of the tower placement endpoint.
    pub fn placement_url(&self) -> String {
        format!("{}/placement/", self.base_url)
    }

    /// URL of a file under the backend's static mount.
    pub fn static_url(&self, filename: &str) -> String {
        format!("{}/static/{filename}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .map_or_else(|| BASE_URL.to_string(), |url| url.trim_end_matches('/').to_string()),
        }
    }
}

// ERROR BODY
/// Error payload the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize, Default)]
pub struct ErrorBody {
    detail: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    /// Extracts the backend's message from a raw body, falling back to a
    /// generic per-endpoint message when the body carries neither field.
    pub fn message_from(body: &str, fallback: &str) -> String {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        parsed
            .detail
            .or(parsed.error)
            .unwrap_or_else(|| fallback.to_string())
    }
}

// CROP CLIENT
/// HTTP client for the prediction/placement backend.
pub struct CropClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl CropClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Requests crop suitability scores for the given conditions. The
    /// response is normalized into a `Prediction` at this boundary.
    pub async fn predict(&self, input: &EnvironmentalInput) -> Result<Prediction, AppError> {
        let payload: PredictionPayload = self
            .post(&self.config.predict_url(), input, PREDICT_FALLBACK)
            .await?;
        Ok(Prediction::from(payload))
    }

    /// Requests an optimized tower placement for the given farm.
    pub async fn optimize(&self, farm: &FarmConfig) -> Result<Placement, AppError> {
        self.post(&self.config.placement_url(), farm, PLACEMENT_FALLBACK)
            .await
    }

    /// Executes a single JSON POST.
    async fn post<B, T>(&self, url: &str, body: &B, fallback: &str) -> Result<T, AppError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| Self::classify_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Backend(ErrorBody::message_from(&body, fallback)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(error: &reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }
}

impl Default for CropClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default client")
    }
}

// CONVENIENCE FUNCTIONS
/// Requests a prediction using default configuration.
pub async fn predict_crops(input: &EnvironmentalInput) -> Result<Prediction, AppError> {
    CropClient::new()?.predict(input).await
}

/// Requests a placement using default configuration.
pub async fn optimize_placement(farm: &FarmConfig) -> Result<Placement, AppError> {
    CropClient::new()?.optimize(farm).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = ApiConfig::default();
        assert_eq!(config.predict_url(), "http://127.0.0.1:8000/predict/");
        assert_eq!(config.placement_url(), "http://127.0.0.1:8000/placement/");
    }

    #[test]
    fn test_custom_base_url() {
        let config = ApiConfig::builder().base_url("http://localhost:9001/").build();
        assert_eq!(config.predict_url(), "http://localhost:9001/predict/");
        assert_eq!(
            config.static_url("layout.png"),
            "http://localhost:9001/static/layout.png"
        );
    }

    #[test]
    fn test_error_body_prefers_detail() {
        let message =
            ErrorBody::message_from(r#"{"detail":"AQI out of range"}"#, PREDICT_FALLBACK);
        assert_eq!(message, "AQI out of range");
    }

    #[test]
    fn test_error_body_falls_back_to_error_field() {
        let message = ErrorBody::message_from(r#"{"error":"model unavailable"}"#, PREDICT_FALLBACK);
        assert_eq!(message, "model unavailable");
    }

    #[test]
    fn test_unparseable_error_body_uses_fallback() {
        assert_eq!(
            ErrorBody::message_from("<html>502</html>", PLACEMENT_FALLBACK),
            "Placement failed"
        );
        assert_eq!(ErrorBody::message_from("", PREDICT_FALLBACK), "Prediction failed");
    }
}
