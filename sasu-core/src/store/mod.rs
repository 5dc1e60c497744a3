//! Persistence layer for the CRM records.
//!
//! The engine itself is pure; only prospects, clients, deals, actions
//! and quotes go through a repository. Backends implement
//! [`CrmRepository`] and register a [`RepositoryFactory`] so callers can
//! pick one by name at runtime.

pub mod factory;
pub mod repository;

pub use factory::{RepositoryFactory, RepositoryRegistry, StoreConfig};
pub use repository::{CrmRepository, RepositoryError};
