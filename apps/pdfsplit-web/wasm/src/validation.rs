//! PDF validation and info extraction
//!
//! Cheap header/trailer checks for early feedback on dropped files, plus a
//! full parse that extracts what the UI shows before the user commits to a
//! split.

use lopdf::Document;
use serde::Serialize;

const HEADER_MAGIC: &[u8] = b"%PDF-";
const EOF_MARKER: &[u8] = b"%%EOF";

// How far from the end of the file to look for the EOF marker
const EOF_SEARCH_WINDOW: usize = 1024;

/// PDF file information extracted during validation
#[derive(Debug, Clone, Serialize)]
pub struct PdfInfo {
    /// Number of pages in the document
    pub page_count: usize,
    /// PDF version string (e.g., "1.7")
    pub version: String,
    /// Whether the document is encrypted
    pub encrypted: bool,
    /// File size in bytes
    pub size_bytes: usize,
    /// Document title from metadata (if available)
    pub title: Option<String>,
    /// Document author from metadata (if available)
    pub author: Option<String>,
}

/// Structural sanity check without parsing the document.
///
/// Catches truncated uploads and non-PDF files before the expensive parse.
pub fn quick_validate(bytes: &[u8]) -> Result<(), String> {
    if bytes.len() < HEADER_MAGIC.len() + EOF_MARKER.len() {
        return Err("File too small to be a valid PDF".to_string());
    }

    if !bytes.starts_with(HEADER_MAGIC) {
        return Err("Not a valid PDF file (missing %PDF- header)".to_string());
    }

    let tail = &bytes[bytes.len().saturating_sub(EOF_SEARCH_WINDOW)..];
    if !tail.windows(EOF_MARKER.len()).any(|w| w == EOF_MARKER) {
        return Err("PDF appears truncated (missing %%EOF marker)".to_string());
    }

    Ok(())
}

/// Validate a PDF file and extract the info shown in the UI
pub fn validate_pdf(bytes: &[u8]) -> Result<PdfInfo, String> {
    quick_validate(bytes)?;

    let document = Document::load_mem(bytes).map_err(|e| format!("Failed to parse PDF: {}", e))?;

    let page_count = document.get_pages().len();
    if page_count == 0 {
        return Err("PDF has no pages".to_string());
    }

    let (title, author) = read_info_dict(&document);

    Ok(PdfInfo {
        page_count,
        version: header_version(bytes),
        encrypted: document.is_encrypted(),
        size_bytes: bytes.len(),
        title,
        author,
    })
}

/// Version digits from the "%PDF-x.y" header.
///
/// Only called after the header magic has been verified.
fn header_version(bytes: &[u8]) -> String {
    let rest = &bytes[HEADER_MAGIC.len()..];
    let len = rest
        .iter()
        .take(8)
        .position(|b| b.is_ascii_whitespace())
        .unwrap_or(8.min(rest.len()));
    String::from_utf8_lossy(&rest[..len]).trim().to_string()
}

/// Title and author from the trailer's Info dictionary, if present
fn read_info_dict(document: &Document) -> (Option<String>, Option<String>) {
    let info = document
        .trailer
        .get(b"Info")
        .ok()
        .and_then(|obj| obj.as_reference().ok())
        .and_then(|id| document.objects.get(&id))
        .and_then(|obj| obj.as_dict().ok());

    let field = |key: &[u8]| {
        info.and_then(|dict| dict.get(key).ok())
            .and_then(|obj| obj.as_str().ok())
            .map(|raw| String::from_utf8_lossy(raw).into_owned())
            .filter(|s| !s.is_empty())
    };

    (field(b"Title"), field(b"Author"))
}
