//! Tests for content loader configuration and endpoint construction.
//!
//! The fetch itself is exercised in vitrine-view's page tests against an
//! unreachable local endpoint; here we pin down the endpoint URL shape.

use vitrine_content::ContentLoader;

#[test]
fn test_endpoint_joins_with_single_slash() {
    let loader = ContentLoader::new("https://site");
    assert_eq!(loader.endpoint(), "https://site/projects.json");
}

#[test]
fn test_endpoint_trims_trailing_slash() {
    let loader = ContentLoader::new("https://site/");
    assert_eq!(loader.endpoint(), "https://site/projects.json");
}

#[test]
fn test_endpoint_same_origin_mode() {
    // Empty base URL is the production deployment mode: a rooted path.
    let loader = ContentLoader::new("");
    assert_eq!(loader.endpoint(), "/projects.json");
}

#[test]
fn test_base_url_is_explicit_state() {
    let loader = ContentLoader::new("http://localhost:3000");
    assert_eq!(loader.base_url(), "http://localhost:3000");
}
