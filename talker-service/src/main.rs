use service_core::observability::init_tracing;
use talker_service::{config::TalkerConfig, Application};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = TalkerConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing("talker-service", &config.log_level);

    let application = Application::build(config.clone()).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!(
        port = application.port(),
        data_file = %config.data_file.display(),
        "Online"
    );

    application.run_until_stopped().await
}
