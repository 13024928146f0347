//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementation of the [`LaborerRepository`] port backed by
//! PostgreSQL via `diesel-async` and a `bb8` pool. Row structs and the
//! `table!` schema are internal; only domain types cross this boundary.
//!
//! [`LaborerRepository`]: crate::domain::ports::LaborerRepository
//!
//! # Example
//!
//! ```ignore
//! use laborer_service::outbound::persistence::{DbPool, DieselLaborerRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/laborers")).await?;
//! let repo = DieselLaborerRepository::new(pool);
//! ```

mod diesel_laborer_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_laborer_repository::DieselLaborerRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
