//! Page composition for the Vitrine renderer.
//!
//! # Scope
//!
//! This crate provides:
//! - **Layout Metrics** - fixed card placement standing in for the
//!   deployed page's CSS grid/flex layout
//! - **View Renderer** - content model to view tree, with the three-way
//!   media dispatch per card
//! - **Video Handles** - DOM-attachable media elements implementing the
//!   playback contract
//! - **Page** - the top-level orchestrator: load, render, observe
//!
//! # Architecture
//!
//! ```text
//! Loader → ContentDocument → Partition → Render → ViewTree
//!                                          ↓
//!                                   MediaBindings → PlaybackController
//! ```
//!
//! The playback controller reacts to viewport movement independently once
//! the rendered media has been handed to it.

pub mod layout;
pub mod media;
pub mod page;
pub mod renderer;

pub use layout::LayoutMetrics;
pub use media::VideoHandle;
pub use page::Page;
pub use renderer::{MediaBinding, RenderedPage, SiteConfig, render_page};
