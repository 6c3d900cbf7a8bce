use crate::employee::RepositoryError;
use std::time::Duration;
use thiserror::Error;

/// Startup failures
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Failed to preload employees: {0}")]
    Preload(#[from] RepositoryError),

    /// A registered hook failed; `source` is what it reported.
    #[error("Startup hook '{hook}' failed: {source}")]
    Hook {
        hook: String,
        #[source]
        source: Box<LifecycleError>,
    },

    #[error("Startup hooks did not finish within {0:?}")]
    TimedOut(Duration),
}

impl LifecycleError {
    pub(crate) fn in_hook(self, hook: &str) -> Self {
        Self::Hook {
            hook: hook.to_string(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LifecycleError>;
