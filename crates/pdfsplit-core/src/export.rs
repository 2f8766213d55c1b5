//! Split pipeline: one output document per parsed page group

use crate::error::SplitError;
use crate::ranges::{parse_ranges, PageGroup};
use crate::split::extract_group;
use lopdf::Document;

/// One serialized output document plus what the caller needs to name it.
#[derive(Debug, Clone)]
pub struct SplitOutput {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    /// "first-last" for a multi-page group, the bare page number otherwise.
    /// Intended use: "report.pdf" split at "3-5" downloads as "report-3-5.pdf".
    pub name_suffix: String,
}

/// Split a PDF into one output per group in the range expression.
///
/// The source is parsed once and shared across all group exports. Returns
/// [`SplitError::NoPagesSelected`] when the expression yields no valid
/// groups; the parser itself never errors (see [`parse_ranges`]).
pub fn split_document(bytes: &[u8], expression: &str) -> Result<Vec<SplitOutput>, SplitError> {
    let source = Document::load_mem(bytes).map_err(|e| SplitError::ParseError(e.to_string()))?;
    let bound = source.get_pages().len();

    let groups = parse_ranges(expression, bound);
    if groups.is_empty() {
        return Err(SplitError::NoPagesSelected);
    }

    export_groups(&source, &groups)
}

/// Export each group from an already-parsed source, in group order.
pub fn export_groups(
    source: &Document,
    groups: &[PageGroup],
) -> Result<Vec<SplitOutput>, SplitError> {
    let mut outputs = Vec::with_capacity(groups.len());

    for group in groups {
        let bytes = extract_group(source, group)?;
        outputs.push(SplitOutput {
            bytes,
            page_count: group.len(),
            name_suffix: group.name_suffix(),
        });
    }

    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{dictionary, Dictionary, Object, Stream};

    // Minimal N-page document, one text line per page
    fn build_pdf(num_pages: usize) -> Vec<u8> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let kids: Vec<Object> = (0..num_pages)
            .map(|i| {
                let text = format!("BT /F1 12 Tf 72 720 Td (Page {}) Tj ET", i + 1);
                let content_id =
                    doc.add_object(Stream::new(Dictionary::new(), text.into_bytes()));
                let page_id = doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                    "Contents" => content_id,
                });
                Object::Reference(page_id)
            })
            .collect();

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Count" => num_pages as i64,
                "Kids" => kids,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    #[test]
    fn test_split_one_output_per_group() {
        let outputs = split_document(&build_pdf(10), "1-3, 5, 8-10").unwrap();

        assert_eq!(outputs.len(), 3);
        assert_eq!(outputs[0].page_count, 3);
        assert_eq!(outputs[1].page_count, 1);
        assert_eq!(outputs[2].page_count, 3);
    }

    #[test]
    fn test_split_outputs_carry_name_suffixes() {
        let outputs = split_document(&build_pdf(10), "1-3, 5, 8-10").unwrap();

        let suffixes: Vec<&str> = outputs.iter().map(|o| o.name_suffix.as_str()).collect();
        assert_eq!(suffixes, vec!["1-3", "5", "8-10"]);
    }

    #[test]
    fn test_split_outputs_are_loadable_pdfs() {
        let outputs = split_document(&build_pdf(6), "2-4, 6").unwrap();

        for output in &outputs {
            let doc = Document::load_mem(&output.bytes).unwrap();
            assert_eq!(doc.get_pages().len(), output.page_count);
        }
    }

    #[test]
    fn test_split_empty_expression_fails() {
        let result = split_document(&build_pdf(5), "");
        assert!(matches!(result, Err(SplitError::NoPagesSelected)));
    }

    #[test]
    fn test_split_fully_invalid_expression_fails() {
        let result = split_document(&build_pdf(5), "abc, 9-2, 40");
        assert!(matches!(result, Err(SplitError::NoPagesSelected)));
    }

    #[test]
    fn test_split_partial_expression_keeps_valid_groups() {
        let outputs = split_document(&build_pdf(5), "abc, 2").unwrap();

        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].name_suffix, "2");
    }

    #[test]
    fn test_split_clips_range_to_document_length() {
        let outputs = split_document(&build_pdf(4), "2-100").unwrap();

        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].page_count, 3);
        assert_eq!(outputs[0].name_suffix, "2-4");
    }

    #[test]
    fn test_split_duplicate_groups_export_independently() {
        let outputs = split_document(&build_pdf(5), "1-2, 1-2").unwrap();

        assert_eq!(outputs.len(), 2);
        for output in &outputs {
            assert_eq!(output.name_suffix, "1-2");
            let doc = Document::load_mem(&output.bytes).unwrap();
            assert_eq!(doc.get_pages().len(), 2);
        }
    }

    #[test]
    fn test_split_rejects_unparseable_bytes() {
        let result = split_document(b"definitely not a pdf", "1");
        assert!(matches!(result, Err(SplitError::ParseError(_))));
    }
}
