//! HTTP front end for the extractor
//!
//! Product forms POST `{"url": "..."}` and get back
//! `{"name", "brand", "image_url"}` or `{"error"}`.

use crate::error::ExtractError;
use crate::extractor::ProductExtractor;
use crate::results::{ErrorBody, ExtractionRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Shared state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<ProductExtractor>,
}

impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        let status = match self {
            ExtractError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ExtractError::Fetch(_) => StatusCode::BAD_GATEWAY,
        };
        error_response(status, self.to_string())
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

/// Build the application router
pub fn router(extractor: Arc<ProductExtractor>) -> Router {
    // Browser clients call this cross-origin straight from the product form
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ]);

    Router::new()
        .route("/", post(extract_handler))
        .route("/fetch-amazon-product", post(extract_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(AppState { extractor })
}

/// Bind `addr` and serve until the process is stopped
pub async fn serve(extractor: Arc<ProductExtractor>, addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    ::log::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(extractor)).await
}

async fn extract_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExtractionRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            ::log::debug!("Rejected request body: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    match state.extractor.extract(&request.url).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            ::log::warn!("Extraction failed for {:?}: {}", request.url, e);
            e.into_response()
        }
    }
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
