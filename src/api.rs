// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP routes for the chart and market endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{error, info};

use crate::blocks::UnixTimestamp;
use crate::charts::{ChartEntry, ChartPayload, ChartService, ChartType};
use crate::errors::ChartError;
use crate::market::MarketInfo;
use crate::source::{BlockSource, FeeSource};

/// Shared state of the HTTP handlers
pub struct AppState<B, F> {
    charts: Arc<ChartService<B, F>>,
    market: Option<watch::Receiver<MarketInfo>>,
}

impl<B, F> AppState<B, F> {
    pub fn new(charts: Arc<ChartService<B, F>>) -> Self {
        Self {
            charts,
            market: None,
        }
    }

    /// Serves `/market` from the given snapshot
    pub fn with_market(mut self, market: watch::Receiver<MarketInfo>) -> Self {
        self.market = Some(market);
        self
    }
}

impl<B, F> Clone for AppState<B, F> {
    fn clone(&self) -> Self {
        Self {
            charts: Arc::clone(&self.charts),
            market: self.market.clone(),
        }
    }
}

/// Body of `GET /charts`
#[derive(Debug, Clone, Serialize)]
pub struct ChartListing {
    pub charts: BTreeMap<ChartType, ChartEntry>,
}

/// Query parameters for the `/charts/{chart_type}` endpoint.
#[derive(Debug, Deserialize)]
struct ChartQuery {
    #[serde(rename = "startTimestamp")]
    start_timestamp: Option<String>,
}

/// Reads the leading integer of `raw`, ignoring any trailing garbage
///
/// Anything without a leading integer, and zero, means "no override".
fn parse_start_timestamp(raw: &str) -> Option<UnixTimestamp> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    trimmed[..sign_len + digits_len]
        .parse::<i64>()
        .ok()
        .filter(|ts| *ts != 0)
        .map(UnixTimestamp)
}

impl IntoResponse for ChartError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            (StatusCode::NOT_FOUND, "Not found").into_response()
        } else {
            error!(error = %self, "Failed to serve chart");
            (StatusCode::SERVICE_UNAVAILABLE, self.to_string()).into_response()
        }
    }
}

/// Handler for the `/charts` endpoint.
async fn list_charts<B, F>(State(state): State<AppState<B, F>>) -> Json<ChartListing>
where
    B: BlockSource + 'static,
    F: FeeSource + 'static,
{
    Json(ChartListing {
        charts: state.charts.list_charts().clone(),
    })
}

/// Handler for the `/charts/{chart_type}` endpoint.
async fn get_chart<B, F>(
    State(state): State<AppState<B, F>>,
    Path(chart_type): Path<String>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<Arc<ChartPayload>>, ChartError>
where
    B: BlockSource + 'static,
    F: FeeSource + 'static,
{
    info!(chart_type = %chart_type, query = ?query, "Received chart request");

    let end = query
        .start_timestamp
        .as_deref()
        .and_then(parse_start_timestamp);

    state.charts.chart(&chart_type, end).await.map(Json)
}

/// Handler for the `/market` endpoint.
async fn get_market<B, F>(State(state): State<AppState<B, F>>) -> Response
where
    B: BlockSource + 'static,
    F: FeeSource + 'static,
{
    match &state.market {
        Some(market) => Json(market.borrow().clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

/// Builds the router for all endpoints
pub fn router<B, F>(state: AppState<B, F>) -> Router
where
    B: BlockSource + 'static,
    F: FeeSource + 'static,
{
    Router::new()
        .route("/charts", get(list_charts::<B, F>))
        .route("/charts/{chart_type}", get(get_chart::<B, F>))
        .route("/market", get(get_market::<B, F>))
        .with_state(state)
}

/// Starts the API server.
pub async fn serve_api(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;

    tracing::info!(address = ?addr, "Starting server");

    axum::serve(listener, app).await?;

    Ok(())
}
