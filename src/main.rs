use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use carousel_client::api::client::ApiClient;
use carousel_client::content::service::CarouselService;
use carousel_client::session::manager::SessionManager;
use carousel_client::token::token_remaining_time;
use carousel_client::utils::config_loader;
use carousel_client::utils::logging;
use carousel_client::utils::logging::LogLevel;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG")]
    config: Option<String>,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    /// Bypass the content cache and fetch fresh data.
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load YAML config, init logging
    // -------------------------------

    let args = Args::parse();
    let settings = config_loader::run(args.config.as_deref()).await?;
    logging::run(&settings, args.log_level)?;

    // -------------------------------
    // 2. Wire client -> session -> carousel service
    // -------------------------------

    let client = Arc::new(ApiClient::new(&settings)?);
    let session = Arc::new(SessionManager::new(client.clone()));
    let service = CarouselService::new(client, session.clone());

    // -------------------------------
    // 3. Fetch carousels (cache-gated unless --force)
    // -------------------------------

    let carousels = service.fetch_carousels(args.force).await?;

    for carousel in &carousels {
        info!(
            "carousel '{}' [{}]: {} items ({} with video)",
            carousel.title.as_deref().unwrap_or("untitled"),
            carousel.kind,
            carousel.items.len(),
            carousel.items.iter().filter(|i| i.has_video).count(),
        );
    }

    if let Some(token) = session.token().await {
        info!(
            "session token valid for another {} ms",
            token_remaining_time(&token)
        );
    }

    Ok(())
}
