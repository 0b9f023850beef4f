use crate::api::handlers::QuoteResponse;
use crate::model::RequestError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Ciudad no encontrada")]
    CityNotFound,
    #[error("Número de pasajeros inválido: {0}")]
    InvalidPassengers(String),
    #[error("{0}")]
    InvalidRequest(#[from] RequestError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Internal(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        };

        (status, Json(QuoteResponse::failure(self.to_string()))).into_response()
    }
}
