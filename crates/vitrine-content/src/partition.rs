//! Featured/secondary section partitioning.
//!
//! A section lands in the featured grid if and only if its title is the
//! exact string [`FEATURED_SECTION_TITLE`]. Everything else goes to the
//! secondary column. The split is a single stable pass: relative order
//! within each output equals relative order in the input.

use crate::model::{ContentDocument, Section};

/// Title that selects a section into the featured grid.
///
/// This is literal string equality on a display label, preserved exactly
/// as the content schema deploys it: a typo like `"featured projects"`
/// silently demotes a section to the secondary column. Known-fragile;
/// raised with the schema owner rather than second-guessed here.
pub const FEATURED_SECTION_TITLE: &str = "Featured Projects";

/// Output of [`partition_sections`]: borrowed views of the document's
/// sections, grouped for the two layout regions.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    /// Sections whose title is exactly [`FEATURED_SECTION_TITLE`], in
    /// source order. The layout contract allows any number of these,
    /// though deployed content carries at most one.
    pub featured: Vec<&'a Section>,
    /// Every other section, in source order.
    pub secondary: Vec<&'a Section>,
}

/// Split a document's sections into featured and secondary groups.
///
/// Deterministic and pure; an empty document yields two empty groups.
#[must_use]
pub fn partition_sections(doc: &ContentDocument) -> Partition<'_> {
    let mut partition = Partition::default();
    for section in &doc.sections {
        if section.title == FEATURED_SECTION_TITLE {
            partition.featured.push(section);
        } else {
            partition.secondary.push(section);
        }
    }
    partition
}
