//! HTTP surface of the quote server.
//!
//! `GET /cotacao` runs the whole pipeline: fetch the bid upstream, record it in
//! the store, answer `{"cotacao": "<bid>"}`. Any failure short-circuits the
//! request and is answered with an `ErrorBody` and a status per error kind;
//! nothing is inserted unless the fetch succeeded, and nothing is answered as a
//! success unless the insert committed.
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::{error, info};
use quote_common::net::QUOTE_PATH;
use quote_common::{ErrorBody, ErrorKind, QuoteError, QuoteResponse};

use crate::fetcher::QuoteFetcher;
use crate::store::QuoteStore;

/// Dependencies shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub fetcher: QuoteFetcher,
    pub store: QuoteStore,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(QUOTE_PATH, get(get_quote))
        .with_state(state)
}

/// A pipeline failure on its way to becoming an HTTP response.
#[derive(Debug)]
pub struct ApiError(QuoteError);

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ErrorKind::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::InvalidResponse => StatusCode::BAD_GATEWAY,
            ErrorKind::StoreTimeout => StatusCode::INSUFFICIENT_STORAGE,
            ErrorKind::Store | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!("Quote request failed with {}: {}", status, self.0);
        (status, Json(ErrorBody::from(&self.0))).into_response()
    }
}

async fn get_quote(State(state): State<AppState>) -> Result<Json<QuoteResponse>, ApiError> {
    let quote = state.fetcher.fetch().await?;

    let store = state.store.clone();
    let bid = quote.bid.clone();
    let record = tokio::task::spawn_blocking(move || store.insert(&bid))
        .await
        .map_err(|e| QuoteError::Task(e.to_string()))??;
    info!("Recorded quote #{}: {}", record.id, record.bid);

    Ok(Json(QuoteResponse::from(&quote)))
}
