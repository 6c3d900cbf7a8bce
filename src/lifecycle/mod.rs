//! Startup hooks and graceful shutdown
//!
//! Hooks registered with [`LifecycleManager`] run once, in order, after the
//! repository and controller are composed and before the listener is bound.
//! [`shutdown_signal`] resolves on Ctrl+C or SIGTERM and drives
//! `axum::serve(..).with_graceful_shutdown(..)`.

mod error;
mod manager;
mod shutdown;
mod traits;

pub use error::{LifecycleError, Result};
pub use manager::LifecycleManager;
pub use shutdown::shutdown_signal;
pub use traits::OnModuleInit;
