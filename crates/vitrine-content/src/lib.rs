//! Content model, loading, and partitioning for the Vitrine page renderer.
//!
//! # Scope
//!
//! This crate implements:
//! - **Content Model** - typed representation of the fetched document
//!   (sections of projects, in authored order)
//! - **Content Loader** - one best-effort retrieval of `projects.json`
//!   below a configured base URL
//! - **Section Partitioner** - stable featured/secondary split on the
//!   section title
//!
//! # Not Implemented
//!
//! - Caching or retry of the fetch (the page keeps its prior document on
//!   failure instead)
//! - Pagination

pub mod loader;
pub mod model;
pub mod partition;

pub use loader::{CONTENT_DOCUMENT_PATH, ContentError, ContentLoader};
pub use model::{ContentDocument, MediaKind, Project, Section};
pub use partition::{FEATURED_SECTION_TITLE, Partition, partition_sections};
