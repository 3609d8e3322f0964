use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use flaggi_gate::{
    config::Config,
    payment::{RpcChainProvider, TransferVerifier, VerifierConfig},
    routes::create_router,
    utils::init_tracing,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);

    // Chain data provider (receipts only, no signing)
    let provider = RpcChainProvider::new(&config.chain.rpc_url)?;
    let verifier = TransferVerifier::new(Arc::new(provider), VerifierConfig::from_config(&config));
    info!(
        "Verifying USDC transfers >= {} to {:?}",
        verifier.config().min_amount,
        verifier.config().recipient
    );

    // Create shared state
    let state = AppState {
        config: config.clone(),
        verifier: Arc::new(verifier),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("FLAGGI API listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
