//! HTTP JSON API.
//!
//! Every tool is a `POST` route taking its request type as a JSON body. Tool
//! validation errors come back as `400 Bad Request` with a `{"detail": ...}`
//! body.

use crate::prelude::{eprintln, *};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use ittools_core::url::{
    parse_url, process_codec, CodecRequest, CodecResponse, ParseRequest, ParseResponse,
};
use ittools_core::ToolError;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, clap::Parser)]
#[command(name = "api")]
#[command(about = "Serve the tools over an HTTP JSON API")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "ITTOOLS_API_PORT", default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "ITTOOLS_API_HOST", default_value = "127.0.0.1")]
    pub host: String,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", app.host, app.port);

    if global.verbose {
        eprintln!("Starting HTTP API on {addr}...");
        eprintln!("URL parser: http://{addr}/api/url-parser/");
        eprintln!("URL encoder: http://{addr}/api/url-encoder/");
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Bind {
            addr: addr.clone(),
            reason: e.to_string(),
        })?;

    log::info!("HTTP API listening on {addr}");

    axum::serve(listener, router())
        .await
        .map_err(|e| Error::Server(e.to_string()))?;

    Ok(())
}

pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/url-parser/", post(url_parser_handler))
        .route("/api/url-encoder/", post(url_encoder_handler))
        .layer(cors)
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
    pub message: &'static str,
}

/// A tool error on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(ToolError);

impl From<ToolError> for ApiError {
    fn from(err: ToolError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("rejecting request ({}): {}", self.0.code(), self.0);

        let body = serde_json::json!({ "detail": self.0.to_string() });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

async fn health_handler() -> Json<Health> {
    Json(Health {
        status: "ok",
        message: "API is running",
    })
}

async fn url_parser_handler(
    Json(request): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, ApiError> {
    log::debug!("url-parser: {:?}", request.url);
    Ok(Json(parse_url(&request)?))
}

async fn url_encoder_handler(
    Json(request): Json<CodecRequest>,
) -> Result<Json<CodecResponse>, ApiError> {
    log::debug!("url-encoder: mode={:?}", request.mode);
    Ok(Json(process_codec(&request)?))
}
