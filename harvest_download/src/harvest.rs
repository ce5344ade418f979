use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::category::{Category, ALL_CATEGORIES};
use crate::error::{Error, Result};
use crate::filter::is_blacklisted;
use crate::util::parse_filename;
use crate::{DownloadOutcome, DownloadTask, HarvestSummary};

async fn fetch(client: &reqwest::Client, url: &str) -> Result<reqwest::Response> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response)
}

/// Create the directory of every category under `root_dir`.
pub async fn prepare_category_dirs(root_dir: impl AsRef<Path>) -> Result<()> {
    for category in ALL_CATEGORIES {
        tokio::fs::create_dir_all(root_dir.as_ref().join(category.dir_name())).await?;
    }
    Ok(())
}

/// Decide where an image URL goes. `None` if the URL has no usable filename.
pub fn plan_download(url: &str, root_dir: impl AsRef<Path>) -> Option<DownloadTask> {
    let filename = parse_filename(url).ok()?;
    let category = Category::classify(url);
    Some(DownloadTask {
        url: url.to_string(),
        root_dir: root_dir.as_ref().to_path_buf(),
        subdir: PathBuf::from(category.dir_name()),
        filename: PathBuf::from(filename),
    })
}

/// Download an image and write it to its destination, return the number of bytes written.
pub async fn download_image(client: &reqwest::Client, task: &DownloadTask) -> Result<u64> {
    // 1. Send request to the URL
    let mut response = fetch(client, &task.url).await?;
    let content_length = response.content_length();

    // 2. Download the image, write to a buffer
    let mut buffer = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        buffer.extend_from_slice(&chunk);
    }

    // 3. Check if the file is complete
    let size = buffer.len() as u64;
    if let Some(content_length) = content_length {
        if size != content_length {
            return Err(Error::IncompleteDownload(task.url.clone()));
        }
    }

    // 4. Save the buffer to the destination
    tokio::fs::write(task.dest_path(), &buffer).await?;
    Ok(size)
}

/// Filter, classify and download a single image URL.
pub async fn harvest_image(client: &reqwest::Client, url: &str, root_dir: impl AsRef<Path>) -> DownloadOutcome {
    if is_blacklisted(url) {
        return DownloadOutcome::Filtered;
    }
    let Some(task) = plan_download(url, root_dir) else {
        return DownloadOutcome::Unnamed;
    };

    let dest_path = task.dest_path();
    match tokio::fs::try_exists(&dest_path).await {
        Ok(true) => return DownloadOutcome::Existing(dest_path),
        Ok(false) => {}
        Err(e) => return DownloadOutcome::Failed(Error::from(e).to_string()),
    }

    match download_image(client, &task).await {
        Ok(size) => {
            tracing::info!("Downloaded: {} ({} bytes)", task.filename.display(), size);
            DownloadOutcome::Downloaded(dest_path)
        }
        Err(e) => DownloadOutcome::Failed(e.to_string()),
    }
}

/// Process every URL in sorted order. Failures are logged and recorded, never fatal.
pub async fn harvest_all(
    client: &reqwest::Client,
    root_dir: impl AsRef<Path>,
    urls: &BTreeSet<String>,
) -> HarvestSummary {
    let mut summary = HarvestSummary::default();
    for url in urls {
        let outcome = harvest_image(client, url, root_dir.as_ref()).await;
        match &outcome {
            DownloadOutcome::Failed(error) => tracing::warn!("Failed to download {}: {}", url, error),
            DownloadOutcome::Existing(path) => tracing::debug!("Already exists: {}", path.display()),
            DownloadOutcome::Filtered => tracing::debug!("Filtered: {}", url),
            DownloadOutcome::Unnamed => tracing::debug!("No filename: {}", url),
            DownloadOutcome::Downloaded(_) => {}
        }
        summary.record(url, outcome);
    }
    summary
}
