//! In-memory backend for the CRM store.
//!
//! Keeps every record in process memory behind a `tokio` read-write
//! lock. Nothing is persisted across restarts; the backend exists for
//! tests, demos and single-session CLI usage, and doubles as the
//! reference implementation of the repository contract.

mod factory;
mod repository;

pub use factory::MemoryRepositoryFactory;
pub use repository::MemoryRepository;
