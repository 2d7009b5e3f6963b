// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP ticker source

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use super::{MarketInfo, TickerSource};
use crate::errors::MarketError;

/// Fetches the ticker from an exchange endpoint answering a JSON array
#[derive(Debug, Clone)]
pub struct HttpTickerSource {
    http_client: Client,
    url: Url,
}

impl HttpTickerSource {
    pub fn new(url: &str) -> Result<Self, MarketError> {
        Self::with_http_client(url, Client::new())
    }

    pub fn with_http_client(url: &str, http_client: Client) -> Result<Self, MarketError> {
        let url = Url::parse(url).map_err(|e| MarketError::invalid_url(url, e))?;
        Ok(Self { http_client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl TickerSource for HttpTickerSource {
    async fn fetch_ticker(&self) -> Result<MarketInfo, MarketError> {
        let response = self.http_client.get(self.url.clone()).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(MarketError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_ticker_body(&body)
    }

    fn name(&self) -> &str {
        self.url.as_str()
    }
}

/// Parses a ticker response body and returns its first element
pub fn parse_ticker_body(body: &str) -> Result<MarketInfo, MarketError> {
    let tickers: Vec<MarketInfo> =
        serde_json::from_str(body).map_err(|e| MarketError::malformed_response(e.to_string()))?;

    tickers
        .into_iter()
        .next()
        .ok_or_else(|| MarketError::malformed_response("empty ticker array"))
}
