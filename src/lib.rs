//! # employee-hal
//!
//! A hypermedia (HAL) employee service on axum.
//!
//! Every response advertises the follow-up actions as links. Links are
//! expanded from the same [`routes::Route`] table the router is built from.
//!
//! ## Endpoints
//!
//! | Method | Path              | Response                         |
//! |--------|-------------------|----------------------------------|
//! | GET    | `/`               | discovery document (2 links)     |
//! | GET    | `/employees`      | linked employee collection       |
//! | POST   | `/employees`      | `201 Created` + `Location`       |
//! | GET    | `/employees/{id}` | linked employee, or `404`        |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use employee_hal::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repository: Arc<dyn EmployeeRepository> = Arc::new(InMemoryEmployeeRepository::new());
//!     let controller = Arc::new(EmployeeController::new(
//!         repository,
//!         Arc::new(EmployeeAssembler::new()),
//!     ));
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, controller.router())
//!         .with_graceful_shutdown(shutdown_signal())
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod common;
pub mod config;
pub mod employee;
pub mod error;
pub mod hateoas;
pub mod lifecycle;
pub mod routes;

pub use app::Application;
pub use config::{AppConfig, ConfigError, ConfigService};
pub use error::{ApiError, Result};
pub use routes::{LinkTarget, Route};

/// Prelude module for convenient imports
///
/// ```
/// use employee_hal::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app::Application;
    pub use crate::common::{Created, Hal};
    pub use crate::config::{AppConfig, ConfigService};
    pub use crate::employee::{
        Employee, EmployeeAssembler, EmployeeController, EmployeeId, EmployeePayload,
        EmployeeRepository,
        InMemoryEmployeeRepository, RepositoryError,
    };
    pub use crate::error::{ApiError, Result};
    pub use crate::hateoas::{CollectionModel, EntityModel, Link, Links, RepresentationModel};
    pub use crate::lifecycle::{LifecycleError, LifecycleManager, OnModuleInit, shutdown_signal};
    pub use crate::routes::{LinkTarget, Route};
    pub use std::sync::Arc;
}
