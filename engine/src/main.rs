// Engine main entry point
use engine::config::EngineSettings;
use engine::services::valuation_service::MyValuationEngine;
use engine::services::ValuationEngineServer;
use engine::DcfEngine;
use std::path::PathBuf;
use tonic::transport::Server;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional first argument: path to a JSON settings file
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = EngineSettings::load(config_path.as_deref())?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    info!("Starting valuation engine...");

    let addr = settings.socket_addr()?;
    let dcf_engine = DcfEngine::new(settings.share_count_policy);
    info!(share_count_policy = ?dcf_engine.share_count_policy(), "Engine will listen on {}", addr);

    let valuation_service = MyValuationEngine::new(dcf_engine);

    Server::builder()
        .add_service(ValuationEngineServer::new(valuation_service))
        .serve(addr)
        .await?;

    Ok(())
}
