mod config;
mod report;

use anyhow::Context;
use dotenvy::dotenv;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use harvest_download::{harvest_all, list_inventory, prepare_category_dirs};
use plaincode_client::PageClient;

use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Initialize logger
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?
        .add_directive("hyper::proto=info".parse()?)
        .add_directive("hyper::client=info".parse()?)
        .add_directive("reqwest=info".parse()?)
        .add_directive("html5ever=warn".parse()?)
        .add_directive("selectors=warn".parse()?);
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    // 2. Load configuration
    let config = Config::from_env();
    let client = PageClient::new().context("cannot build HTTP client")?;

    // 3. Scrape all pages into one set of image URLs
    let images = client.collect_image_urls(config.pages.as_slice()).await;
    tracing::info!("Found {} unique images", images.len());

    // 4. Create category directories, without them nothing can be saved
    prepare_category_dirs(&config.image_dir)
        .await
        .with_context(|| format!("cannot create category directories in {}", config.image_dir.display()))?;

    // 5. Download images
    let summary = harvest_all(client.http(), &config.image_dir, &images).await;
    tracing::info!(
        "Successfully downloaded {} images ({} already present, {} skipped, {} failed)",
        summary.downloaded,
        summary.existing,
        summary.filtered + summary.unnamed,
        summary.failures.len()
    );

    // 6. List what is on disk now
    let inventory = list_inventory(&config.image_dir)
        .await
        .context("cannot list category directories")?;
    println!("\n{}", report::format_inventory(&inventory));

    Ok(())
}
