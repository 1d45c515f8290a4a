//! Media URL resolution.
//!
//! [§ 2.5 URLs](https://html.spec.whatwg.org/multipage/urls-and-fetching.html#resolving-urls)
//! [URL Standard](https://url.spec.whatwg.org/)

/// Resolve a project's media reference against the site's base URL.
///
/// [§ 2.5 URLs](https://html.spec.whatwg.org/multipage/urls-and-fetching.html#resolving-urls)
///
/// STEP 1: "If url is an absolute URL, return url."
///
/// An absolute media reference is recognized by an exact, case-sensitive
/// `http://` or `https://` prefix. Anything else - including other
/// schemes and uppercase variants - takes the relative branch, exactly as
/// the deployed content expects.
///
/// STEP 2: "Otherwise, resolve url relative to base."
///
/// Relative references are joined to the base URL by a single `/`.
/// Pure and total: there is no failure mode, only the two branches.
#[must_use]
pub fn resolve_media_url(media: &str, base_url: &str) -> String {
    if media.starts_with("http://") || media.starts_with("https://") {
        return media.to_string();
    }
    join_path(base_url, media)
}

/// Join a base URL and a path with exactly one `/` separator.
///
/// A trailing slash on `base_url` is trimmed first so that bases authored
/// either way produce the same result. An empty base yields `/{path}`,
/// which is the same-origin deployment mode.
#[must_use]
pub fn join_path(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}
