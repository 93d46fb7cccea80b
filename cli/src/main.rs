use clap::Parser;
use infrastructure::config::Config;
use infrastructure::logging::init_logging;
use presentation::cli::{Cli, PanelApp};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = Config::load();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.clone());
    }
    init_logging(&config);
    info!(version = env!("CARGO_PKG_VERSION"), url = %config.ask_url(), "askpanel starting");

    let mut app = PanelApp::new(&config)?;
    app.run(cli).await?;
    Ok(())
}
