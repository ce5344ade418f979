mod category;
mod error;
mod filter;
mod harvest;
mod inventory;
mod util;

pub use category::*;
pub use error::Error;
pub use filter::is_blacklisted;
pub use harvest::*;
pub use inventory::*;
pub use util::parse_filename;

use std::path::PathBuf;

/// A task to download an image from a URL to a file.
/// The destination is `root_dir/subdir/filename`.
#[derive(Debug, Clone)]
pub struct DownloadTask {
    pub url: String,
    pub root_dir: PathBuf,
    pub subdir: PathBuf,
    pub filename: PathBuf,
}

impl DownloadTask {
    pub fn dest_path(&self) -> PathBuf {
        self.root_dir.join(&self.subdir).join(&self.filename)
    }
}

/// Terminal state of one image URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Matched the blacklist
    Filtered,
    /// No usable filename in the URL
    Unnamed,
    /// Destination already on disk
    Existing(PathBuf),
    Failed(String),
    Downloaded(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFailure {
    pub url: String,
    pub error: String,
}

/// Counters for a whole harvest run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestSummary {
    pub total: u64,
    pub filtered: u64,
    pub unnamed: u64,
    pub existing: u64,
    pub downloaded: u64,
    pub failures: Vec<DownloadFailure>,
}

impl HarvestSummary {
    pub fn record(&mut self, url: &str, outcome: DownloadOutcome) {
        self.total += 1;
        match outcome {
            DownloadOutcome::Filtered => self.filtered += 1,
            DownloadOutcome::Unnamed => self.unnamed += 1,
            DownloadOutcome::Existing(_) => self.existing += 1,
            DownloadOutcome::Downloaded(_) => self.downloaded += 1,
            DownloadOutcome::Failed(error) => self.failures.push(DownloadFailure {
                url: url.to_string(),
                error,
            }),
        }
    }
}
