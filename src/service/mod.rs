//! Profile operations between the GraphQL resolvers and the store.

mod profile;
mod validation;
pub use profile::ProfileService;
pub use validation::parse_profile_id;
