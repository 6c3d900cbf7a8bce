use super::{LifecycleError, OnModuleInit, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

type SharedHook = Arc<RwLock<dyn OnModuleInit>>;

/// Ordered list of startup hooks
///
/// ```rust,ignore
/// let mut manager = LifecycleManager::new();
/// manager.register_init(Arc::new(RwLock::new(loader)), "DemoDataLoader");
/// manager.call_module_init_with_timeout(Duration::from_secs(30)).await?;
/// ```
#[derive(Default)]
pub struct LifecycleManager {
    hooks: Vec<(String, SharedHook)>,
}

impl LifecycleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_init<T>(&mut self, service: Arc<RwLock<T>>, name: impl Into<String>)
    where
        T: OnModuleInit + 'static,
    {
        let hook: SharedHook = service;
        self.hooks.push((name.into(), hook));
    }

    pub fn init_hook_count(&self) -> usize {
        self.hooks.len()
    }

    /// Run hooks in registration order; the first failure aborts startup.
    pub async fn call_module_init(&self) -> Result<()> {
        for (name, hook) in &self.hooks {
            tracing::debug!(hook = %name, "Running startup hook");
            if let Err(e) = hook.write().await.on_module_init().await {
                tracing::error!(hook = %name, error = %e, "Startup hook failed");
                return Err(e.in_hook(name));
            }
        }
        tracing::info!(count = self.hooks.len(), "Startup hooks finished");
        Ok(())
    }

    pub async fn call_module_init_with_timeout(&self, limit: Duration) -> Result<()> {
        match tokio::time::timeout(limit, self.call_module_init()).await {
            Ok(result) => result,
            Err(_) => Err(LifecycleError::TimedOut(limit)),
        }
    }
}
