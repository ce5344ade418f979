use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use scraper::Html;
use url::Url;

use crate::error::Result;
use crate::selectors::IMAGE;

/// Resolve an `src` attribute against the page it was found on.
pub fn resolve_url(base: &Url, src: &str) -> Option<String> {
    base.join(src).ok().map(String::from)
}

/// Collect the absolute URLs of all `img` elements, in document order.
/// Duplicates are kept; elements without `src` are skipped.
pub fn parse_image_urls(doc: &Html, base: &Url) -> Vec<String> {
    doc.select(&IMAGE)
        .filter_map(|e| e.value().attr("src"))
        .filter_map(|src| {
            let resolved = resolve_url(base, src);
            if resolved.is_none() {
                tracing::debug!("Cannot resolve image source {:?} against {}", src, base);
            }
            resolved
        })
        .collect()
}

/// Parse a document with scripting disabled, so `<noscript>` content is markup rather than text.
pub fn parse_document(html: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    html5ever::parse_document(Html::new_document(), opts).one(html)
}

/// Parse the markup of the page at `page_url` and extract its image URLs.
/// html5ever recovers from malformed markup, so only an invalid `page_url` fails.
pub fn extract_image_urls(html: &str, page_url: &str) -> Result<Vec<String>> {
    let base = Url::parse(page_url)?;
    let doc = parse_document(html);
    Ok(parse_image_urls(&doc, &base))
}
