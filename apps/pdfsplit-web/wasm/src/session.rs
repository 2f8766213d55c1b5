//! Stateful split session for the browser
//!
//! Holds the loaded document and the current page groups in Rust so the
//! JavaScript side only handles DOM events and downloads. The source is
//! parsed exactly once, when the file is loaded; every group export reuses
//! that parsed handle.

use crate::validation::{validate_pdf, PdfInfo};
use lopdf::Document;
use pdfsplit_core::{extract_group, parse_ranges, PageGroup, SplitOutput};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// The loaded source: parsed once, reused for every group export
struct LoadedDocument {
    name: String,
    document: Document,
    info: PdfInfo,
}

/// Per-group summary for UI display
#[derive(Debug, Clone, Serialize)]
pub struct GroupPreview {
    pub first_page: usize,
    pub last_page: usize,
    pub page_count: usize,
    pub name_suffix: String,
}

/// Stateful split session holding one document and its page groups
#[wasm_bindgen]
pub struct SplitSession {
    source: Option<LoadedDocument>,
    groups: Vec<PageGroup>,
    progress_callback: Option<js_sys::Function>,
}

impl Default for SplitSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl SplitSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            source: None,
            groups: Vec::new(),
            progress_callback: None,
        }
    }

    /// Set a progress callback function
    /// Callback signature: (current: number, total: number, message: string) => void
    #[wasm_bindgen(js_name = setProgressCallback)]
    pub fn set_progress_callback(&mut self, callback: js_sys::Function) {
        self.progress_callback = Some(callback);
    }

    /// Load the source document, replacing any previous one.
    /// Returns document info on success.
    #[wasm_bindgen(js_name = loadDocument)]
    pub fn load_document(&mut self, name: &str, bytes: &[u8]) -> Result<JsValue, JsValue> {
        let info = self
            .load_document_internal(name, bytes)
            .map_err(|e| JsValue::from_str(&e))?;

        web_sys::console::log_1(
            &format!("pdfsplit: loaded {} ({} pages)", name, info.page_count).into(),
        );

        serde_wasm_bindgen::to_value(&info)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Drop the loaded document and any parsed groups
    pub fn clear(&mut self) {
        self.source = None;
        self.groups.clear();
    }

    /// Parse a range expression like "1-3, 5, 8-10" against the loaded
    /// document. Each token becomes one output file.
    #[wasm_bindgen(js_name = setRanges)]
    pub fn set_ranges(&mut self, expression: &str) -> Result<(), JsValue> {
        self.set_ranges_internal(expression)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Per-group summaries for the UI
    #[wasm_bindgen(js_name = getGroupPreviews)]
    pub fn get_group_previews(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.previews_internal())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = documentName)]
    pub fn document_name(&self) -> Option<String> {
        self.source.as_ref().map(|s| s.name.clone())
    }

    #[wasm_bindgen(js_name = pageCount)]
    pub fn page_count(&self) -> usize {
        self.source.as_ref().map_or(0, |s| s.info.page_count)
    }

    #[wasm_bindgen(js_name = groupCount)]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Check if the session is ready for execution
    #[wasm_bindgen(js_name = canExecute)]
    pub fn can_execute(&self) -> bool {
        self.source.is_some() && !self.groups.is_empty()
    }

    /// Export one output document per group. Returns an array of
    /// `{ nameSuffix, pageCount, bytes }` objects in group order.
    pub fn execute(&self) -> Result<js_sys::Array, JsValue> {
        let outputs = self.execute_internal().map_err(|e| JsValue::from_str(&e))?;

        let result = js_sys::Array::new();
        for output in outputs {
            let entry = js_sys::Object::new();
            js_sys::Reflect::set(
                &entry,
                &"nameSuffix".into(),
                &JsValue::from_str(&output.name_suffix),
            )?;
            js_sys::Reflect::set(
                &entry,
                &"pageCount".into(),
                &JsValue::from_f64(output.page_count as f64),
            )?;
            let bytes = js_sys::Uint8Array::new_with_length(output.bytes.len() as u32);
            bytes.copy_from(&output.bytes);
            js_sys::Reflect::set(&entry, &"bytes".into(), &bytes)?;
            result.push(&entry);
        }

        Ok(result)
    }
}

// Internal methods keep JsValue out of the logic so it is testable natively
impl SplitSession {
    fn load_document_internal(&mut self, name: &str, bytes: &[u8]) -> Result<PdfInfo, String> {
        let info = validate_pdf(bytes)?;

        let document =
            Document::load_mem(bytes).map_err(|e| format!("Failed to parse PDF: {}", e))?;

        self.source = Some(LoadedDocument {
            name: name.to_string(),
            document,
            info: info.clone(),
        });
        self.groups.clear();

        Ok(info)
    }

    fn set_ranges_internal(&mut self, expression: &str) -> Result<(), String> {
        let source = self.source.as_ref().ok_or("No document loaded")?;

        let groups = parse_ranges(expression, source.info.page_count);
        if groups.is_empty() {
            return Err("Invalid page ranges specified or no pages selected".to_string());
        }

        self.groups = groups;
        Ok(())
    }

    fn previews_internal(&self) -> Vec<GroupPreview> {
        self.groups
            .iter()
            .map(|g| GroupPreview {
                first_page: g.first_page(),
                last_page: g.last_page(),
                page_count: g.len(),
                name_suffix: g.name_suffix(),
            })
            .collect()
    }

    fn execute_internal(&self) -> Result<Vec<SplitOutput>, String> {
        let source = self.source.as_ref().ok_or("No document loaded")?;
        if self.groups.is_empty() {
            return Err("Invalid page ranges specified or no pages selected".to_string());
        }

        let total = self.groups.len();
        let mut outputs = Vec::with_capacity(total);

        for (i, group) in self.groups.iter().enumerate() {
            self.report_progress(
                i,
                total,
                &format!("Exporting pages {}...", group.name_suffix()),
            );

            let bytes = extract_group(&source.document, group)
                .map_err(|e| format!("Split failed: {}", e))?;

            outputs.push(SplitOutput {
                bytes,
                page_count: group.len(),
                name_suffix: group.name_suffix(),
            });
        }

        self.report_progress(total, total, "Complete");
        Ok(outputs)
    }

    fn report_progress(&self, current: usize, total: usize, message: &str) {
        if let Some(ref callback) = self.progress_callback {
            let this = JsValue::null();
            let _ = callback.call3(
                &this,
                &JsValue::from_f64(current as f64),
                &JsValue::from_f64(total as f64),
                &JsValue::from_str(message),
            );
        }
    }
}
