//! Infrastructure layer - external concerns

pub mod database;
pub mod server;

pub use database::{init_database, DatabaseConfig, EntitySource, QuerySource};
pub use server::shutdown_signal;
