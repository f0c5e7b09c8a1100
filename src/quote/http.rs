//! HTTP quote source.
//!
//! Issues a plain GET against the configured endpoint. The body is read as
//! text first so transport failures and JSON failures stay distinguishable.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::ACCEPT;
use serde_json::Value;

use super::source::{QuoteError, QuoteSource};
use super::types::{FieldPair, Quote, parse_quote};

pub struct HttpQuoteSource {
    url: String,
    fields: Vec<FieldPair>,
    client: reqwest::Client,
}

impl HttpQuoteSource {
    pub fn new(url: impl Into<String>, fields: Vec<FieldPair>) -> Self {
        Self {
            url: url.into(),
            fields,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_quote(&self) -> Result<Quote, QuoteError> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| QuoteError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Quote endpoint status: {}", status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Quote endpoint error: {} - {}", status.as_u16(), message);
            return Err(QuoteError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| QuoteError::Network(e.to_string()))?;
        let value: Value = serde_json::from_str(&body)
            .map_err(|e| QuoteError::Malformed(format!("invalid JSON: {e}")))?;

        parse_quote(&value, &self.fields)
    }
}
