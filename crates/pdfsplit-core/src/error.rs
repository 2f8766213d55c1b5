use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Failed to parse PDF: {0}")]
    ParseError(String),

    #[error("Invalid page ranges specified or no pages selected")]
    NoPagesSelected,

    #[error("Page extraction failed: {0}")]
    PageExtraction(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
