//! Typed content model for the fetched document.
//!
//! The document is a flat, ordered tree: sections in display order, each
//! holding projects in display order. Order is preserved exactly as
//! authored; no sorting or deduplication is performed. The model is
//! created once per page load and is immutable thereafter - a content
//! update replaces the whole document rather than editing it in place.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use strum_macros::{Display, EnumString};
use vitrine_common::warning::warn_once;

/// Root of the content document served at `GET {base_url}/projects.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentDocument {
    /// Sections in display order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl ContentDocument {
    /// Parse a JSON body into a content document.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body is not valid JSON or
    /// does not conform to the document shape.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// A titled group of projects.
///
/// The title doubles as the display heading and, for the featured group,
/// as the partition key (see [`crate::partition`]).
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    /// Display heading and partition key.
    pub title: String,
    /// Projects in display order within the section.
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// A single project card.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    /// Card heading.
    pub title: String,
    /// Card body text.
    pub description: String,
    /// Activation target of the card; an opaque URL, passed through
    /// without validation.
    pub link: String,
    /// Media reference: an absolute URL, a path relative to the site base
    /// URL, or (for [`MediaKind::Fontawesome`]) an icon class list.
    pub media: String,
    /// How the media slot is presented. Unrecognized or absent values
    /// degrade to [`MediaKind::Image`] rather than failing the parse.
    #[serde(default, deserialize_with = "media_kind_or_image")]
    pub media_type: MediaKind,
    /// Optional repository URL; no GitHub affordance is rendered when
    /// absent.
    #[serde(default)]
    pub github: Option<String>,
}

/// Presentation kind for a project's media slot.
///
/// The wire values are the exact lowercase strings. Matching is
/// case-sensitive (`"Video"` is not a video), and anything unrecognized
/// renders as a static image placeholder instead of crashing the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    /// Playable, visibility-gated `<video>` element.
    Video,
    /// Font Awesome icon; the project's `media` field carries the icon
    /// class list.
    Fontawesome,
    /// Static image; also the fallback for unrecognized values.
    #[default]
    Image,
}

/// Deserialize a `media_type` string, falling back to [`MediaKind::Image`]
/// for anything unrecognized (including `null`).
fn media_kind_or_image<'de, D>(deserializer: D) -> Result<MediaKind, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        None => MediaKind::default(),
        Some(value) => MediaKind::from_str(value).unwrap_or_else(|_| {
            warn_once(
                "content",
                &format!("unrecognized media_type '{value}', rendering as image"),
            );
            MediaKind::Image
        }),
    })
}
