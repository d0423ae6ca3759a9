//! HTTP handlers for the GraphQL surface.

pub mod graphql;
pub use graphql::*;
