//! Sistema de manejo de errores
//!
//! Este módulo define los errores de generación de IDs y los errores
//! de la aplicación, junto con su conversión a respuestas HTTP.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Motivo por el que un registro de entrada no es utilizable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRecordReason {
    #[error("Name is empty or has no tokens")]
    EmptyName,

    #[error("brand_id has {len} characters, at least 3 are required")]
    BrandIdTooShort { len: usize },
}

/// Errores de los generadores de IDs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdGenerationError {
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord {
        index: usize,
        reason: InvalidRecordReason,
    },

    #[error("Sequence exhausted for '{base_username}' at index {index} (max 999 per batch)")]
    SequenceExhausted { index: usize, base_username: String },

    #[error("Vehicle at index {vehicle_index}: dealerIndex {dealer_index} does not match any dealer (batch has {dealer_count})")]
    UnknownDealer {
        vehicle_index: usize,
        dealer_index: usize,
        dealer_count: usize,
    },
}

impl IdGenerationError {
    /// Posición del registro que provocó el error
    pub fn index(&self) -> usize {
        match self {
            IdGenerationError::InvalidRecord { index, .. } => *index,
            IdGenerationError::SequenceExhausted { index, .. } => *index,
            IdGenerationError::UnknownDealer { vehicle_index, .. } => *vehicle_index,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            IdGenerationError::InvalidRecord { .. } => "INVALID_RECORD",
            IdGenerationError::SequenceExhausted { .. } => "SEQUENCE_EXHAUSTED",
            IdGenerationError::UnknownDealer { .. } => "UNKNOWN_DEALER",
        }
    }

    /// Detalles para la respuesta HTTP: índice y tipo de registro al que se refiere
    pub fn details(&self) -> serde_json::Value {
        match self {
            IdGenerationError::InvalidRecord { index, .. }
            | IdGenerationError::SequenceExhausted { index, .. } => {
                json!({ "index": index, "record": "dealer" })
            }
            IdGenerationError::UnknownDealer {
                vehicle_index,
                dealer_index,
                dealer_count,
            } => json!({
                "index": vehicle_index,
                "record": "vehicle",
                "dealerIndex": dealer_index,
                "dealerCount": dealer_count,
            }),
        }
    }
}

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("ID generation error: {0}")]
    IdGeneration(#[from] IdGenerationError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::IdGeneration(e) => {
                warn!("⚠️ Registro rechazado: {}", e);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse {
                        error: "Invalid Record".to_string(),
                        message: e.to_string(),
                        details: Some(e.details()),
                        code: Some(e.code().to_string()),
                    },
                )
            }

            AppError::Validation(e) => {
                warn!("⚠️ Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                warn!("⚠️ Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, error: validator::ValidationError) -> AppError {
    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
