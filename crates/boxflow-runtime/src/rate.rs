//! Dollar rate lookup against the NBU statistics endpoint.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::RuntimeError;

/// Fixed endpoint the editor queries for the dollar exchange rate.
pub const NBU_RATE_URL: &str =
  "https://bank.gov.ua/NBUStatService/v1/statdirectory/dollar_info?data=20200615&json";

/// One row of the NBU statistics response. Only the fields the executor
/// formats are read; the rest of the row is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rate {
  /// Currency code, e.g. "USD".
  pub cc: String,
  /// Exchange rate against UAH.
  pub rate: f64,
}

/// Source of the dollar exchange rate.
///
/// The executor depends on this seam rather than on HTTP directly;
/// production uses [`NbuRateClient`], tests substitute scripted sources.
#[async_trait]
pub trait RateSource: Send + Sync {
  /// Fetch the current dollar rate.
  async fn dollar_rate(&self) -> Result<Rate, RuntimeError>;
}

/// HTTP rate source backed by the NBU statistics service.
pub struct NbuRateClient {
  client: reqwest::Client,
  url: String,
}

impl NbuRateClient {
  /// Create a client against the fixed NBU endpoint.
  pub fn new() -> Self {
    Self::with_url(NBU_RATE_URL)
  }

  /// Point the client at a different endpoint (tests, mirrors).
  pub fn with_url(url: impl Into<String>) -> Self {
    Self {
      client: reqwest::Client::new(),
      url: url.into(),
    }
  }
}

impl Default for NbuRateClient {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl RateSource for NbuRateClient {
  async fn dollar_rate(&self) -> Result<Rate, RuntimeError> {
    let response = self.client.get(&self.url).send().await?;
    let body = response.error_for_status()?.text().await?;

    let rows: Vec<Rate> =
      serde_json::from_str(&body).map_err(|e| RuntimeError::InvalidResponse {
        message: format!("malformed rate body: {}", e),
      })?;

    rows
      .into_iter()
      .next()
      .ok_or_else(|| RuntimeError::InvalidResponse {
        message: "rate response contained no rows".to_string(),
      })
  }
}
