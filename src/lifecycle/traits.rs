use super::Result;
use async_trait::async_trait;

/// Work that must finish before the server accepts requests, such as
/// preloading a repository
#[async_trait]
pub trait OnModuleInit: Send + Sync {
    async fn on_module_init(&mut self) -> Result<()>;
}
