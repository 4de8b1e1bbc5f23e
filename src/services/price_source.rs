//! Spot price sources.
//!
//! The engine only ever sees a positive finite price or an error; transport
//! retries happen inside the source and are invisible to the caller.

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PriceSourceError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} for {symbol}")]
    Status { symbol: String, status: u16 },
    #[error("malformed spot payload for {symbol}")]
    Malformed { symbol: String },
    #[error("non-positive price {price} for {symbol}")]
    InvalidPrice { symbol: String, price: f64 },
}

/// A source of current spot prices, opaque to the engine.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch(&self, symbol: &str) -> Result<f64, PriceSourceError>;
}

#[derive(Debug, Deserialize)]
struct SpotResponse {
    data: SpotData,
}

#[derive(Debug, Deserialize)]
struct SpotData {
    amount: String,
}

/// Coinbase spot price endpoint: GET /v2/prices/{symbol}/spot.
///
/// Transient transport failures are retried with exponential backoff;
/// non-2xx responses and malformed payloads are not.
pub struct CoinbasePriceSource {
    client: reqwest::Client,
    base_url: String,
}

impl CoinbasePriceSource {
    pub fn new() -> Self {
        Self::with_base_url("https://api.coinbase.com/v2")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn fetch_once(&self, symbol: &str) -> Result<f64, PriceSourceError> {
        let url = format!("{}/prices/{}/spot", self.base_url, symbol);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PriceSourceError::Status {
                symbol: symbol.to_string(),
                status: status.as_u16(),
            });
        }

        let body: SpotResponse =
            response
                .json()
                .await
                .map_err(|_| PriceSourceError::Malformed {
                    symbol: symbol.to_string(),
                })?;
        let price: f64 = body
            .data
            .amount
            .parse()
            .map_err(|_| PriceSourceError::Malformed {
                symbol: symbol.to_string(),
            })?;

        if !price.is_finite() || price <= 0.0 {
            return Err(PriceSourceError::InvalidPrice {
                symbol: symbol.to_string(),
                price,
            });
        }

        Ok(price)
    }
}

impl Default for CoinbasePriceSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceSource for CoinbasePriceSource {
    async fn fetch(&self, symbol: &str) -> Result<f64, PriceSourceError> {
        (|| self.fetch_once(symbol))
            .retry(ExponentialBuilder::default().with_max_times(3))
            .when(|e| matches!(e, PriceSourceError::Http(_)))
            .notify(|err, dur| {
                debug!(error = %err, backoff_ms = dur.as_millis() as u64, "retrying spot fetch");
            })
            .await
    }
}
