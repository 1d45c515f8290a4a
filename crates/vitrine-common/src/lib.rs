//! Common utilities for the Vitrine page renderer.
//!
//! This crate provides shared infrastructure used by all page components:
//! - **URL Resolution** - media references against the site base URL
//! - **HTTP Fetch** - blocking GET wrapper for the content loader
//! - **Warning System** - colored, deduplicated terminal output

pub mod net;
pub mod url;
pub mod warning;
