//! Profile persistence: the store trait, pool setup and startup DDL.

mod memory;
mod postgres;

pub use memory::MemoryProfileStore;
pub use postgres::PgProfileStore;

use crate::config::DatabaseConfig;
use crate::error::AppError;
use crate::model::ChildProfile;
use crate::sql::{create_schema_ddl, create_table_ddl};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Storage seam used by the profile service. One call is one statement.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Look up one profile by canonical id. `Ok(None)` when no row matches.
    async fn fetch(&self, id: &str) -> Result<Option<ChildProfile>, AppError>;

    /// Insert a fully built profile. A duplicate id is a [`AppError::Conflict`].
    async fn insert(&self, profile: &ChildProfile) -> Result<(), AppError>;

    /// Cheap round trip for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Create the connection pool and connect eagerly so startup fails fast.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await?;
    tracing::info!(
        max_connections = config.max_connections,
        "connected to database"
    );
    Ok(pool)
}

/// Create `<schema>` and `<schema>.person` if missing. Idempotent.
pub async fn ensure_profile_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&create_schema_ddl(schema)).execute(pool).await?;
    sqlx::query(&create_table_ddl(schema)).execute(pool).await?;
    tracing::info!(schema, "profile table ready");
    Ok(())
}
