//! GraphQL schema definition.
//!
//! - [`query`] - `getChildProfile`
//! - [`mutation`] - `createChildProfile`
//! - [`error_codes`] - `extensions.code` on parse and validation errors

mod error_codes;
mod mutation;
mod query;

use crate::service::ProfileService;
use async_graphql::{EmptySubscription, Schema};

pub use error_codes::ErrorCodes;
pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// The GraphQL schema type for the child profile API.
pub type ProfileSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Create the schema with the service available to every resolver.
pub fn build_schema(service: ProfileService) -> ProfileSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .extension(ErrorCodes)
        .finish()
}
