//! Typed errors and GraphQL error mapping.

use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("invalid SQL identifier: '{0}'")]
    InvalidIdentifier(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    /// Stable code placed in `extensions.code` of a GraphQL error.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::InvalidInput(_) => "BAD_USER_INPUT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Db(e) => match e {
                sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::WorkerCrashed
                | sqlx::Error::Io(_)
                | sqlx::Error::Tls(_) => "STORE_UNAVAILABLE",
                _ => "DATABASE_ERROR",
            },
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_and_store_failures_have_distinct_codes() {
        assert_eq!(AppError::NotFound("x".into()).code(), "NOT_FOUND");
        assert_eq!(AppError::Db(sqlx::Error::PoolTimedOut).code(), "STORE_UNAVAILABLE");
        assert_eq!(AppError::Db(sqlx::Error::PoolClosed).code(), "STORE_UNAVAILABLE");
        assert_eq!(AppError::Db(sqlx::Error::RowNotFound).code(), "DATABASE_ERROR");
    }

    #[test]
    fn extend_carries_message_and_code() {
        let err = AppError::InvalidInput("id must not be empty".into()).extend();
        assert_eq!(err.message, "invalid input: id must not be empty");
        let code = err.extensions.as_ref().and_then(|ext| ext.get("code")).cloned();
        assert_eq!(code, Some(async_graphql::Value::from("BAD_USER_INPUT")));
    }
}
