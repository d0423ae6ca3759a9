//! Child profile API: GraphQL query and mutation over a PostgreSQL table.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod schema;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{DatabaseConfig, ServerConfig};
pub use error::{AppError, ConfigError};
pub use model::{ChildProfile, NewChildProfile};
pub use routes::app_router;
pub use schema::{build_schema, ProfileSchema};
pub use service::ProfileService;
pub use state::AppState;
pub use store::{connect, ensure_profile_table, MemoryProfileStore, PgProfileStore, ProfileStore};
