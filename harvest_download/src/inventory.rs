use itertools::Itertools;

use std::path::Path;

use crate::category::{Category, ALL_CATEGORIES};
use crate::error::Result;

/// List the files currently in each category directory, sorted by name.
/// Includes files from earlier runs. A missing directory lists as empty.
pub async fn list_inventory(root_dir: impl AsRef<Path>) -> Result<Vec<(Category, Vec<String>)>> {
    let mut inventory = Vec::new();
    for category in ALL_CATEGORIES {
        let dir = root_dir.as_ref().join(category.dir_name());
        let mut names = Vec::new();
        if tokio::fs::try_exists(&dir).await? {
            let mut entries = tokio::fs::read_dir(&dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        inventory.push((category, names.into_iter().sorted().collect()));
    }
    Ok(inventory)
}

#[cfg(test)]
mod test {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_list_inventory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir_all(root.join("icons")).unwrap();
        std::fs::create_dir_all(root.join("other")).unwrap();
        std::fs::write(root.join("icons/logo.png"), b"a").unwrap();
        std::fs::write(root.join("icons/app-icon.png"), b"b").unwrap();
        std::fs::write(root.join("other/banner.png"), b"c").unwrap();

        let inventory = list_inventory(root).await.unwrap();
        assert_eq!(
            inventory,
            vec![
                (Category::Apps, vec![]),
                (Category::Screenshots, vec![]),
                (Category::Icons, vec!["app-icon.png".to_string(), "logo.png".to_string()]),
                (Category::Other, vec!["banner.png".to_string()]),
            ]
        );
    }
}
