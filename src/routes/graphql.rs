//! GraphQL route: GET serves GraphiQL or runs a query-string request, POST executes.

use crate::handlers::graphql::{graphql_get, graphql_post};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn graphql_routes(state: AppState) -> Router {
    Router::new()
        .route("/graphql", get(graphql_get).post(graphql_post))
        .with_state(state)
}
