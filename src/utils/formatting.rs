//! Text formatting utilities for the clubdeck GUI.
//!
//! This module provides helper functions for formatting values in a human-readable way.

/// Extracts the display host of an outbound URL for tooltips.
///
/// Strips the scheme, a leading `www.`, and everything after the first slash.
/// Unrecognizable input is returned unchanged.
pub fn link_host(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    match rest.find('/') {
        Some(idx) => &rest[..idx],
        None => rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scheme_www_and_path() {
        assert_eq!(link_host("https://www.instagram.com/bites.isb"), "instagram.com");
        assert_eq!(link_host("http://example.org"), "example.org");
        assert_eq!(link_host("https://www.google.com/maps/place/x"), "google.com");
    }

    #[test]
    fn passes_through_unrecognized_input() {
        assert_eq!(link_host("not a url"), "not a url");
    }
}
