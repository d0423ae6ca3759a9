//! GraphQL query resolvers.

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::model::ChildProfile;
use crate::service::ProfileService;

/// Root query type for the GraphQL schema.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a child profile by ID.
    async fn get_child_profile(&self, ctx: &Context<'_>, id: String) -> Result<Option<ChildProfile>> {
        let service = ctx.data::<ProfileService>()?;
        let profile = service.get(&id).await.map_err(|e| e.extend())?;
        Ok(Some(profile))
    }
}
