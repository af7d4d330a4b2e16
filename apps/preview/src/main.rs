use anyhow::{Context, Result};
use clap::Parser;
use shared::domain::{CategoryFilter, Page};
use site_core::{config::load_settings, Site};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Loads the site content once and prints the composed frame for a page.
#[derive(Parser, Debug)]
struct Args {
    /// Overrides the configured content base url.
    #[arg(long)]
    base_url: Option<String>,
    #[arg(long, default_value = "home")]
    page: Page,
    /// Portfolio category to select before rendering.
    #[arg(long)]
    category: Option<CategoryFilter>,
    /// Opens the lightbox on this position of the shown portfolio items.
    #[arg(long)]
    open: Option<usize>,
    #[arg(long)]
    toggle_menu: bool,
    #[arg(long)]
    no_cache_bust: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(base_url) = args.base_url {
        settings.content_base_url = base_url;
    }
    if args.no_cache_bust {
        settings.cache_bust = false;
    }

    let site = Site::from_settings(&settings).context("failed to set up site session")?;
    let aborted = site.start().settled().await;
    info!(
        base_url = %settings.content_base_url,
        aborted = aborted.len(),
        "preview: content settled"
    );

    site.navigate(args.page).await;
    if let Some(category) = args.category {
        site.select_category(category).await;
    }
    if let Some(index) = args.open {
        site.open_lightbox(index)
            .await
            .context("failed to open lightbox")?;
    }
    if args.toggle_menu {
        site.toggle_mobile_menu().await;
    }

    let frame = site.render().await;
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}
