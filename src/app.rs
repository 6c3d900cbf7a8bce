//! Application Bootstrap
//!
//! Composes repository, assembler and controller explicitly and runs the
//! startup hooks before the router is handed to the server.

use crate::config::AppConfig;
use crate::employee::{
    DemoDataLoader, EmployeeAssembler, EmployeeController, EmployeeRepository,
    InMemoryEmployeeRepository,
};
use crate::lifecycle::{LifecycleManager, Result};
use axum::Router;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

/// Router for the employee service with request tracing installed.
pub fn router(repository: Arc<dyn EmployeeRepository>) -> Router {
    let controller = Arc::new(EmployeeController::new(
        repository,
        Arc::new(EmployeeAssembler::new()),
    ));
    controller.router().layer(TraceLayer::new_for_http())
}

/// An initialized service, ready to be served
///
/// # Example
///
/// ```rust,ignore
/// let app = Application::bootstrap(&AppConfig::from_env()?).await?;
/// axum::serve(listener, app.router())
///     .with_graceful_shutdown(shutdown_signal())
///     .await?;
/// ```
pub struct Application {
    repository: Arc<dyn EmployeeRepository>,
}

impl Application {
    /// Bootstrap on a fresh in-memory repository.
    pub async fn bootstrap(config: &AppConfig) -> Result<Self> {
        Self::bootstrap_with(config, Arc::new(InMemoryEmployeeRepository::new())).await
    }

    /// Bootstrap on the given repository, running every init hook within
    /// the configured timeout.
    pub async fn bootstrap_with(
        config: &AppConfig,
        repository: Arc<dyn EmployeeRepository>,
    ) -> Result<Self> {
        tracing::info!("Starting application initialization...");

        let mut lifecycle = LifecycleManager::new();
        if config.seed_demo_data {
            let loader = DemoDataLoader::new(Arc::clone(&repository));
            lifecycle.register_init(Arc::new(RwLock::new(loader)), "DemoDataLoader");
        }
        lifecycle
            .call_module_init_with_timeout(config.init_timeout)
            .await?;

        tracing::info!("Application initialization complete");
        Ok(Self { repository })
    }

    pub fn repository(&self) -> &Arc<dyn EmployeeRepository> {
        &self.repository
    }

    pub fn router(&self) -> Router {
        router(Arc::clone(&self.repository))
    }
}
