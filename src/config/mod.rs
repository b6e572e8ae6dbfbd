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

//! Configuration management for siakad-server.
//!
//! Provides typed configuration structures, YAML/JSON file loading, and
//! automatic environment variable interpolation using POSIX-style syntax:
//! `${VAR_NAME}` for required variables and `${VAR_NAME:-default}` for
//! variables with a fallback.
//!
//! # Configuration File Example
//!
//! ```yaml
//! server:
//!   host: "${SERVER_HOST:-0.0.0.0}"
//!   port: "${SERVER_PORT:-8080}"
//!   log_level: "${LOG_LEVEL:-info}"
//!
//! database:
//!   url: "${DATABASE_URL}"
//!   max_connections: 5
//! ```

pub mod env_interpolation;
pub mod loader;
pub mod types;

pub use loader::{from_json_str, from_yaml_str, load_config_file, ConfigError};
pub use types::{DatabaseSettings, ServerSettings, SiakadConfig};
