// Copyright 2025 The SIAKAD Project Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types shared by every handler.
//!
//! Database failures carry an entity-scoped context message that is the only
//! thing sent to the client; the underlying driver error goes to the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use log::error;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::StoreError;

/// Error codes for API responses
pub mod error_codes {
    pub const DOSEN_NOT_FOUND: &str = "DOSEN_NOT_FOUND";
    pub const MAHASISWA_NOT_FOUND: &str = "MAHASISWA_NOT_FOUND";
    pub const MATKUL_NOT_FOUND: &str = "MATKUL_NOT_FOUND";
    pub const NILAI_NOT_FOUND: &str = "NILAI_NOT_FOUND";

    pub const DUPLICATE_KEY: &str = "DUPLICATE_KEY";
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// API error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Convert an error code to an HTTP status code
pub fn status_from_code(code: &str) -> StatusCode {
    match code {
        error_codes::DOSEN_NOT_FOUND
        | error_codes::MAHASISWA_NOT_FOUND
        | error_codes::MATKUL_NOT_FOUND
        | error_codes::NILAI_NOT_FOUND => StatusCode::NOT_FOUND,

        error_codes::DUPLICATE_KEY => StatusCode::CONFLICT,

        error_codes::INVALID_REQUEST => StatusCode::BAD_REQUEST,

        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Error returned by route handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or empty required field (400).
    #[error("{0}")]
    Validation(String),

    /// Entity not found (404). `code` selects the per-entity error code.
    #[error("{message}")]
    NotFound {
        code: &'static str,
        message: String,
    },

    /// Duplicate unique key on create (409).
    #[error("{0}")]
    Conflict(String),

    /// Stored procedure reported no effect where one was required (500).
    #[error("{0}")]
    Internal(String),

    /// Database failure (500). Only `context` reaches the client.
    #[error("{context}")]
    Database {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// Wrap a store error with the entity-scoped message shown to clients.
    pub fn database(context: &'static str, source: StoreError) -> Self {
        Self::Database { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            ApiError::Validation(message) => (error_codes::INVALID_REQUEST, message),
            ApiError::NotFound { code, message } => (code, message),
            ApiError::Conflict(message) => (error_codes::DUPLICATE_KEY, message),
            ApiError::Internal(message) => (error_codes::INTERNAL_ERROR, message),
            ApiError::Database { context, source } => {
                // The driver message stays out of the response body.
                error!("{context} ({source})");
                (error_codes::DATABASE_ERROR, context.to_string())
            }
        };

        let status = status_from_code(code);
        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}
