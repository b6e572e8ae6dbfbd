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

use anyhow::Result;
use log::{error, info};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{build_router, ApiDoc};
use crate::config::{load_config_file, SiakadConfig};
use crate::db::{AcademicStore, MySqlStore};

pub struct SiakadServer {
    config: SiakadConfig,
    config_file_path: String,
}

impl SiakadServer {
    /// Create a new SiakadServer from a configuration file
    pub fn new(config_path: PathBuf, port_override: Option<u16>) -> Result<Self> {
        let mut config: SiakadConfig = load_config_file(&config_path)?;
        if let Some(port) = port_override {
            config.server.port = port;
        }
        config.validate()?;

        Ok(Self {
            config,
            config_file_path: config_path.to_string_lossy().to_string(),
        })
    }

    pub fn config(&self) -> &SiakadConfig {
        &self.config
    }

    #[allow(clippy::print_stdout)]
    pub async fn run(self) -> Result<()> {
        println!("Starting SIAKAD Server");
        println!("  Config file: {}", self.config_file_path);
        println!("  API Port: {}", self.config.server.port);
        println!(
            "  Log level: {}",
            std::env::var("RUST_LOG").unwrap_or_else(|_| self.config.server.log_level.clone())
        );
        info!("Initializing SIAKAD Server");

        info!(
            "Connecting to MySQL at {}",
            self.config.database.redact_url()
        );
        let store = MySqlStore::connect(&self.config.database).await?;
        info!("Database connection pool ready");

        self.serve(Arc::new(store)).await
    }

    /// Serve the API over an already-constructed store.
    pub async fn serve(self, store: Arc<dyn AcademicStore>) -> Result<()> {
        let app = build_router(store)
            .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
            .layer(CorsLayer::permissive());

        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        info!("Starting web API on {addr}");
        info!("Swagger UI available at http://{addr}/docs/");

        let listener = tokio::net::TcpListener::bind(&addr).await?;

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                error!("Web API server error: {e}");
            }
        });

        info!(
            "SIAKAD Server started successfully with API on port {}",
            self.config.server.port
        );

        // Wait for shutdown signal
        tokio::signal::ctrl_c().await?;
        info!("Shutting down SIAKAD Server");

        Ok(())
    }
}
