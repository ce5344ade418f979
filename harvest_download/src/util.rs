use url::Url;

use crate::error::{Error, Result};

/// Parse the filename from a URL: the last segment of its path.
/// Fails if the segment is empty or has no extension.
pub fn parse_filename(url: &str) -> Result<String> {
    let invalid = |reason| Error::InvalidUrl(url.to_string(), reason);
    let parsed = Url::parse(url).map_err(|_| invalid("cannot parse"))?;
    let filename = parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .ok_or(invalid("no path"))?;
    if filename.is_empty() {
        return Err(invalid("no filename"));
    }
    if !filename.contains('.') {
        return Err(invalid("no extension"));
    }
    Ok(filename.to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_filename() {
        assert_eq!(parse_filename("https://x.com/img/logo.png").unwrap(), "logo.png");
        assert_eq!(parse_filename("https://x.com/a/b/shot.v2.jpg?w=100#top").unwrap(), "shot.v2.jpg");
        assert_eq!(parse_filename("https://x.com/img/my%20logo.png").unwrap(), "my%20logo.png");
    }

    fn reason(url: &str) -> &'static str {
        match parse_filename(url) {
            Err(Error::InvalidUrl(_, reason)) => reason,
            other => panic!("expected InvalidUrl for {}, got {:?}", url, other),
        }
    }

    #[test]
    fn test_parse_filename_without_extension() {
        assert_eq!(reason("https://x.com/images/foo"), "no extension");
        assert_eq!(reason("https://x.com/images?file=a.png"), "no extension");
        assert_eq!(reason("https://x.com/images/"), "no filename");
        assert_eq!(reason("https://x.com"), "no filename");
    }

    #[test]
    fn test_parse_filename_without_path() {
        assert_eq!(reason("data:image/png;base64,iVBORw0KGgo="), "no path");
        assert_eq!(reason("not a url"), "cannot parse");
    }

    #[test]
    fn test_invalid_url_message() {
        let err = parse_filename("https://x.com/images/foo").unwrap_err();
        assert_eq!(err.to_string(), "Invalid URL https://x.com/images/foo: no extension");
    }
}
