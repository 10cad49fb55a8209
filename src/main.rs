use tokio::try_join;
use tracing::{error, info};
use vouch::{
    api::{business_router, product_router, start_api_server},
    config::Config,
    observability::{init_observability, log_config_info},
    Result, APP_NAME, VERSION,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (optional - won't fail if missing)
    // This must happen before any config is read from environment
    if let Err(e) = dotenvy::dotenv() {
        // Only warn if the error is NOT "file not found"
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Error loading .env file: {}", e);
        }
    }

    let config = Config::from_env()?;
    init_observability(&config.observability)?;

    info!(app_name = APP_NAME, version = VERSION, "Starting Vouch profile validation service");
    log_config_info(&config);

    let business_api = {
        let router = business_router(&config.server);
        let server_config = config.server.clone();
        async move { start_api_server(server_config, router).await }
    };

    let product_api = {
        let router = product_router(&config.product_server);
        let server_config = config.product_server.clone();
        async move { start_api_server(server_config, router).await }
    };

    if let Err(e) = try_join!(business_api, product_api) {
        error!("API servers terminated with error: {}", e);
        std::process::exit(1);
    }

    info!("Shutdown completed");
    Ok(())
}
