//! `PostgreSQL` adapters for board persistence.
//!
//! Both repositories share one r2d2 pool and push every Diesel call onto
//! the blocking thread pool.

mod blocking;
mod models;
mod preference;
mod repository;
mod schema;

pub use blocking::BoardPgPool;
pub use preference::PostgresColumnPreferenceRepository;
pub use repository::PostgresTaskRepository;
