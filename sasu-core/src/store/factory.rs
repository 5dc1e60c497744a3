use std::collections::HashMap;

use async_trait::async_trait;

use super::repository::{CrmRepository, RepositoryError};

/// Selects which store backend to open, and where.
///
/// `backend` picks a registered factory by its
/// [`RepositoryFactory::backend_name`]. `location` is an opaque string the
/// chosen factory interprets on its own terms (a file path for a disk
/// backend, nothing at all for the in-memory one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Lowercase name of a registered backend (e.g. `"memory"`).
    pub backend: String,
    /// Backend-specific target handed to the factory as-is.
    pub location: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            location: String::new(),
        }
    }
}

/// Opens repositories for one kind of backend. Backend crates expose a
/// unit struct implementing this trait; callers register it at startup
/// and never name the concrete repository type afterwards.
#[async_trait]
pub trait RepositoryFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Open (or create) the store and return a ready-to-use repository.
    async fn create(&self, config: &StoreConfig)
    -> Result<Box<dyn CrmRepository>, RepositoryError>;
}

/// Name-keyed collection of [`RepositoryFactory`] instances.
///
/// A process builds one registry at startup, registers every backend it
/// was compiled with, and then opens repositories through [`Self::create`]
/// using nothing but a [`StoreConfig`].
pub struct RepositoryRegistry {
    factories: HashMap<&'static str, Box<dyn RepositoryFactory>>,
}

impl RepositoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory. Registering a second factory under the
    /// same name replaces the first.
    pub fn register(&mut self, factory: Box<dyn RepositoryFactory>) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Sorted list of the registered backend names.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Open a repository through the factory named by `config.backend`.
    ///
    /// # Errors
    /// * [`RepositoryError::Configuration`] when no factory carries the
    ///   requested name.
    /// * Whatever the selected factory reports while opening the store.
    pub async fn create(
        &self,
        config: &StoreConfig,
    ) -> Result<Box<dyn CrmRepository>, RepositoryError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                RepositoryError::Configuration(format!(
                    "no '{}' backend is registered (known backends: {:?})",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config).await
    }
}

impl Default for RepositoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
