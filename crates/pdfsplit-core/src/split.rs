//! Page extraction for a single output group
//!
//! Builds each output document by whitelist: clone the parsed source,
//! delete every page outside the group, then prune the orphaned objects.

use crate::error::SplitError;
use crate::ranges::PageGroup;
use lopdf::Document;
use std::collections::HashSet;

/// Copy the group's pages out of `source` into a fresh, serialized document.
///
/// `source` is parsed once by the caller and shared across group exports.
/// Group indices are zero-based; within a range group they are contiguous
/// ascending, so the source page order is the export order.
pub fn extract_group(source: &Document, group: &PageGroup) -> Result<Vec<u8>, SplitError> {
    let page_count = source.get_pages().len();

    if group.last_page() > page_count {
        return Err(SplitError::PageExtraction(format!(
            "Page {} does not exist (document has {} pages)",
            group.last_page(),
            page_count
        )));
    }

    let keep: HashSet<u32> = group.pages().iter().map(|&idx| idx as u32 + 1).collect();

    let mut output = source.clone();

    // Delete in reverse order so earlier page numbers stay valid
    let mut to_delete: Vec<u32> = (1..=page_count as u32)
        .filter(|p| !keep.contains(p))
        .collect();
    to_delete.reverse();
    for page_num in to_delete {
        output.delete_pages(&[page_num]);
    }

    output.prune_objects();
    output.compress();

    let mut buffer = Vec::new();
    output
        .save_to(&mut buffer)
        .map_err(|e| SplitError::Serialization(format!("Save failed: {}", e)))?;

    Ok(buffer)
}
