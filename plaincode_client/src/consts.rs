pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/113.0.0.0 Safari/537.36";

/// Pages scraped on every run, in order.
pub const PAGE_URLS: &[&str] = &[
    "https://www.plaincode.com/",
    "https://www.plaincode.com/products/",
    "https://www.plaincode.com/products/clinometer/",
    "https://www.plaincode.com/products/magnetmeter/",
    "https://www.plaincode.com/products/accelmeter/",
    "https://www.plaincode.com/products/isetsquare/",
    "https://www.plaincode.com/products/contactsbynumber/",
    "https://www.plaincode.com/products/magichue/",
];
