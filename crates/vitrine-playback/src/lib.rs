//! Visibility-gated media playback for the Vitrine page renderer.
//!
//! # Scope
//!
//! This crate implements:
//! - **Viewport Geometry** - rectangles and intersection ratios
//!   ([Intersection Observer](https://w3c.github.io/IntersectionObserver/))
//! - **Playback Controller** - an explicit observer that plays a video
//!   while at least a quarter of it is visible and pauses it otherwise
//!   ([§ 4.8.11.8 Playing the media resource](https://html.spec.whatwg.org/multipage/media.html#playing-the-media-resource))
//!
//! # Not Implemented
//!
//! - Cross-element coordination ("only one plays at a time"): elements
//!   are tracked independently by design.

pub mod controller;
pub mod geometry;

pub use controller::{
    MediaElement, MediaKey, PlaybackController, PlaybackError, PlaybackState,
    VISIBILITY_THRESHOLD,
};
pub use geometry::{Rect, intersection_ratio};
