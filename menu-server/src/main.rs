use menu_server::{Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, logging)
    setup_environment()?;

    tracing::info!("Menu server starting...");

    // 2. Configuration
    let config = Config::from_env();

    // 3. Application state (storage, session, settings sync)
    let state = ServerState::initialize(&config)?;
    state.start_background_tasks();

    // 4. HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
