//! Command envelope for driving the splitter from a JS worker

use crate::error::SplitError;
use crate::export::SplitOutput;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum SplitCommand {
    Split { file: Vec<u8>, ranges: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitResult {
    pub success: bool,
    pub outputs: Vec<OutputArtifact>,
    pub error: Option<String>,
    pub metrics: Option<SplitMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputArtifact {
    pub name_suffix: String,
    /// Base64-encoded PDF data
    pub data: String,
    pub page_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitMetrics {
    pub input_size_bytes: usize,
    pub output_count: usize,
    pub total_pages_exported: usize,
    pub processing_time_ms: u64,
}

impl SplitResult {
    pub fn from_outputs(outputs: &[SplitOutput], input_size: usize, elapsed_ms: u64) -> Self {
        let artifacts: Vec<OutputArtifact> = outputs
            .iter()
            .map(|o| OutputArtifact {
                name_suffix: o.name_suffix.clone(),
                data: BASE64.encode(&o.bytes),
                page_count: o.page_count,
            })
            .collect();

        let metrics = SplitMetrics {
            input_size_bytes: input_size,
            output_count: outputs.len(),
            total_pages_exported: outputs.iter().map(|o| o.page_count).sum(),
            processing_time_ms: elapsed_ms,
        };

        Self {
            success: true,
            outputs: artifacts,
            error: None,
            metrics: Some(metrics),
        }
    }

    pub fn from_error(err: &SplitError) -> Self {
        Self {
            success: false,
            outputs: Vec::new(),
            error: Some(err.to_string()),
            metrics: None,
        }
    }
}
