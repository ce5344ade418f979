use harvest_download::Category;

/// Render the inventory as a heading per non-empty category followed by its files.
pub fn format_inventory(inventory: &[(Category, Vec<String>)]) -> String {
    let mut out = String::from("=== Downloaded Images by Category ===\n");
    for (category, files) in inventory.iter().filter(|(_, files)| !files.is_empty()) {
        out.push_str(&format!("\n{}:\n", category.dir_name().to_uppercase()));
        for file in files {
            out.push_str(&format!("  - {}\n", file));
        }
    }
    out
}
