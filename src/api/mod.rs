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

//! HTTP API surface: models, handlers, router, and OpenAPI document.

pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod responses;
pub mod routes;

pub use error::{error_codes, status_from_code, ApiError, ErrorResponse};
pub use openapi::ApiDoc;
pub use responses::{HealthResponse, MessageResponse};
pub use routes::build_router;
