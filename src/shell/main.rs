use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use trakka::shared::core::clock::SystemClock;
use trakka::shell::config::Config;
use trakka::shell::graphql::build_schema;
use trakka::shell::http::router;
use trakka::shell::seed::seed_demo_users;
use trakka::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,trakka=debug")))
        .init();

    let state = AppState::in_memory(&config, Arc::new(SystemClock));
    if config.seed_demo_users {
        let seeded = seed_demo_users(&state).await?;
        for actor in &seeded {
            tracing::info!(username = %actor.username, user_id = %actor.user_id, "demo user available");
        }
    }

    let schema = build_schema(state.clone());
    let app = router(state, schema, config.enable_graphiql);

    tracing::info!("listening on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
