use todo_server::ServerConfig;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Before the subscriber so RUST_LOG can come from `.env`.
    let dotenv_error = todo_server::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Some(e) = dotenv_error {
        warn!(error = %e, "ignoring unreadable .env file");
    }

    let config = ServerConfig::from_env()
        .inspect_err(|e| error!(error = %e, "invalid configuration"))?;
    let listener = todo_server::bind(&config)
        .await
        .inspect_err(|e| error!(error = %e, "bind failed"))?;
    todo_server::run(listener, todo_server::app()).await?;
    Ok(())
}
