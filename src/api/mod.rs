use thiserror::Error;

use crate::core::{CalcResponse, Snapshot};

/// Environment variable naming the calculation service base URL.
pub const BASE_URL_ENV: &str = "RETIREWISE_API_BASE_URL";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{BASE_URL_ENV} is not set; configure the calculation service base URL")]
    MissingBaseUrl,
    #[error("calculation service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to reach calculation service: {0}")]
    Transport(String),
    #[error("could not decode calculation response: {0}")]
    Decode(String),
}

/// Thin client for the external calculation service. One POST per call, no
/// retries; every failure maps to a single human-readable error.
#[derive(Debug, Clone)]
pub struct CalculateClient {
    base_url: String,
}

impl CalculateClient {
    /// Trailing slashes are trimmed so the request path never doubles up.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads the base URL from the environment. A missing or empty value is
    /// a fatal configuration error for the host.
    pub fn from_env() -> Result<Self, ApiError> {
        match std::env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Ok(Self::new(value.trim())),
            _ => Err(ApiError::MissingBaseUrl),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn calculate_url(&self) -> String {
        format!("{}/calculate", self.base_url)
    }

    /// Submits a snapshot and decodes the service result.
    pub fn calculate(&self, snapshot: &Snapshot) -> Result<CalcResponse, ApiError> {
        let url = self.calculate_url();
        match ureq::post(&url).send_json(snapshot) {
            Ok(response) => response
                .into_json::<CalcResponse>()
                .map_err(|e| ApiError::Decode(e.to_string())),
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                Err(ApiError::Status { status, body })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(ApiError::Transport(transport.to_string()))
            }
        }
    }
}
