//! PostgreSQL-backed profile store over a connection pool.

use super::ProfileStore;
use crate::error::AppError;
use crate::model::{ChildProfile, ProfileRow};
use crate::sql::ProfileStatements;
use async_trait::async_trait;
use sqlx::PgPool;

/// Each call checks a connection out of the pool for one statement and returns it on completion.
#[derive(Clone)]
pub struct PgProfileStore {
    pool: PgPool,
    statements: ProfileStatements,
}

impl PgProfileStore {
    /// `schema` must already be a validated identifier (see [`crate::config::validate_identifier`]).
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgProfileStore {
            pool,
            statements: ProfileStatements::new(schema),
        }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn fetch(&self, id: &str) -> Result<Option<ChildProfile>, AppError> {
        let row: Option<ProfileRow> = sqlx::query_as(&self.statements.select_by_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(ChildProfile::from))
    }

    async fn insert(&self, profile: &ChildProfile) -> Result<(), AppError> {
        let result = sqlx::query(&self.statements.insert)
            .bind(&profile.id)
            .bind(&profile.given_name)
            .bind(profile.middle_name.as_deref())
            .bind(&profile.family_name)
            .bind(&profile.birth_date)
            .execute(&self.pool)
            .await;
        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(AppError::Conflict(
                format!("child profile '{}' already exists", profile.id),
            )),
            Err(e) => Err(AppError::Db(e)),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
