use timezone_converter_api::{cli::Cli, server, utils::logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments
    let config = Cli::parse_config()?;

    // Initialize logging based on environment
    logging::init_logging()?;

    if let Err(e) = server::run(config).await {
        tracing::error!("Failed to run Timezone Converter API: {}", e);
        return Err(e.into());
    }

    Ok(())
}
