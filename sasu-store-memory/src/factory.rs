use async_trait::async_trait;

use sasu_core::store::factory::{RepositoryFactory, StoreConfig};
use sasu_core::store::repository::{CrmRepository, RepositoryError};

use crate::repository::MemoryRepository;

/// Factory for the `"memory"` backend. The config's `location` is
/// ignored; every `create` call returns a fresh, empty store.
pub struct MemoryRepositoryFactory;

#[async_trait]
impl RepositoryFactory for MemoryRepositoryFactory {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(
        &self,
        _config: &StoreConfig,
    ) -> Result<Box<dyn CrmRepository>, RepositoryError> {
        Ok(Box::new(MemoryRepository::new()))
    }
}
