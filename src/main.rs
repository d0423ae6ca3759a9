//! Child profile GraphQL server: loads config, connects the pool, ensures the table, serves.

use child_profile_api::{app_router, connect, ensure_profile_table, AppState, PgProfileStore, ServerConfig};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("child_profile_api=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let pool = connect(&config.database).await?;
    if config.database.ensure_schema {
        ensure_profile_table(&pool, &config.database.schema).await?;
    }
    let store = PgProfileStore::new(pool, &config.database.schema);
    let state = AppState::new(Arc::new(store));
    let app = app_router(state, config.body_limit);

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("GraphiQL: http://{}/graphql", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
