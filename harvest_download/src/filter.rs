/// Substrings marking tracking pixels, ads and social buttons.
const BLACKLIST: [&str; 6] = ["1x1", "pixel", "tracker", "ads", "facebook.com", "twitter.com"];

/// Whether the URL should be skipped entirely. Case-insensitive.
pub fn is_blacklisted(url: &str) -> bool {
    let url = url.to_lowercase();
    BLACKLIST.iter().any(|s| url.contains(s))
}
