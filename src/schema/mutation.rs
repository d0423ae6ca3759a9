//! GraphQL mutation resolvers.

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::model::{ChildProfile, NewChildProfile};
use crate::service::ProfileService;

/// Root mutation type for the GraphQL schema.
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new child profile. The server assigns the ID.
    async fn create_child_profile(
        &self,
        ctx: &Context<'_>,
        given_name: String,
        middle_name: Option<String>,
        family_name: String,
        birth_date: String,
    ) -> Result<Option<ChildProfile>> {
        let service = ctx.data::<ProfileService>()?;
        let input = NewChildProfile {
            given_name,
            middle_name,
            family_name,
            birth_date,
        };
        let profile = service.create(input).await.map_err(|e| e.extend())?;
        Ok(Some(profile))
    }
}
