use std::env;
use std::path::PathBuf;

use plaincode_client::PAGE_URLS;

pub const DEFAULT_IMAGE_DIR: &str = "images";

#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory of the category directories
    pub image_dir: PathBuf,
    pub pages: Vec<String>,
}

impl Config {
    /// Read the configuration from the environment, falling back to the defaults.
    pub fn from_env() -> Self {
        Config {
            image_dir: image_dir_or_default(env::var("IMAGE_DIR").ok()),
            pages: PAGE_URLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// An unset or blank `IMAGE_DIR` keeps the fixed `images` root.
fn image_dir_or_default(value: Option<String>) -> PathBuf {
    let image_dir = value
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_IMAGE_DIR.to_string());
    PathBuf::from(image_dir)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_pages() {
        let config = Config::from_env();
        assert_eq!(config.pages.len(), 8);
        assert_eq!(config.pages[0], "https://www.plaincode.com/");
        assert!(config.pages.iter().all(|p| p.starts_with("https://www.plaincode.com/")));
    }

    #[test]
    fn test_image_dir_default() {
        assert_eq!(image_dir_or_default(None), PathBuf::from("images"));
        assert_eq!(image_dir_or_default(Some("  ".to_string())), PathBuf::from("images"));
        assert_eq!(image_dir_or_default(Some("/tmp/harvest".to_string())), PathBuf::from("/tmp/harvest"));
    }
}
