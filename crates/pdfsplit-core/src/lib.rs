//! Range-based PDF partitioning
//!
//! Splits a source PDF into multiple output documents, driven by a
//! user-entered page-range expression like "1-3, 5, 8-10". Each
//! comma-separated token becomes one output document: ranges are inclusive
//! and 1-based, out-of-bound ends are clipped, malformed tokens drop
//! silently, and group order follows the expression.
//!
//! The heavy lifting (page copying, serialization) is delegated to lopdf;
//! this crate owns the partitioning semantics and the export loop.

pub mod command;
pub mod error;
pub mod export;
pub mod ranges;
pub mod split;

pub use command::{OutputArtifact, SplitCommand, SplitMetrics, SplitResult};
pub use error::SplitError;
pub use export::{export_groups, split_document, SplitOutput};
pub use ranges::{parse_ranges, PageGroup};
pub use split::extract_group;

/// Parse PDF bytes and return the page count
pub fn get_page_count(bytes: &[u8]) -> Result<usize, SplitError> {
    let doc =
        lopdf::Document::load_mem(bytes).map_err(|e| SplitError::ParseError(e.to_string()))?;
    Ok(doc.get_pages().len())
}
