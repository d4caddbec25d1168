//! Support queries: three-layer layout (domain, repository, service).
//!
//! Handlers only see [`QueryService`]; the backing store is chosen at startup.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{CreateQueryInput, NewQuery, SupportQuery, UpdateStatusInput};
pub use repository::{memory::InMemoryQueryRepository, QueryRepository};
pub use repo::seaorm::SeaOrmQueryRepository;
pub use service::QueryService;
