//! In-page anchor links.

/// Element id targeted by an in-page link, e.g. `#about` -> `about`.
/// A bare `#` and non-fragment hrefs target nothing.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/resume.pdf"), None);
        assert_eq!(anchor_target("https://example.com/#about"), None);
    }
}
