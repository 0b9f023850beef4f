// HTTP façade over the flight search
use crate::api::error::ApiError;
use crate::search::FlightSearch;
use axum::{
    http::{header::CONTENT_TYPE, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod cities;
pub mod error;
pub mod handlers;

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<FlightSearch>,
    /// Result cap for the quote endpoint; `None` returns every offer.
    pub top: Option<usize>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/cotizar", post(handlers::quote))
        .route("/api/health", get(handlers::health))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unexpected error".to_string()
    };
    ApiError::Internal(message).into_response()
}
