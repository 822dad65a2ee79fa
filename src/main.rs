// Copyright 2025 Kirky.X
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

use std::sync::Arc;
use taskscrape::config::settings::Settings;
use taskscrape::domain::services::scrape_service::ScrapeService;
use taskscrape::engines::reqwest_engine::ReqwestFetcher;
use taskscrape::infrastructure::database::connection;
use taskscrape::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use taskscrape::infrastructure::storage::LocalContentStore;
use taskscrape::presentation::routes::{self, AppState};
use taskscrape::utils::telemetry;
use tokio::net::TcpListener;
use tracing::{error, info};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry()?;
    info!("Starting taskscrape {}...", env!("CARGO_PKG_VERSION"));

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded: {:?}", settings);

    // 3. Connect to database and run migrations
    let db = Arc::new(connection::connect_and_migrate(&settings.database).await?);
    info!("Database connection established");

    // 4. Content store
    let store = Arc::new(LocalContentStore::new(&settings.storage.local_path));
    store.init().await?;
    info!("Content store ready at {}", store.base_path().display());

    // 5. Fetcher and scrape service
    let fetcher = Arc::new(ReqwestFetcher::from_settings(&settings.scraper)?);
    let scrape_service = Arc::new(ScrapeService::new(fetcher, store.clone()));

    // 6. Start HTTP server
    let app = routes::routes(AppState {
        settings: settings.clone(),
        task_repo: Arc::new(TaskRepositoryImpl::new(db)),
        store,
        scrape_service,
    });

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// 等待 Ctrl+C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
    info!("Shutting down gracefully...");
}
