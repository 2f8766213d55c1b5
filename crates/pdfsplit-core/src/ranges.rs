//! Page range expression parsing
//!
//! A range expression like "1-3, 5, 8-10" describes which pages to pull out
//! of a document. Unlike a flat page selection, every comma-separated token
//! becomes its own group, and every group becomes one output document. Groups
//! keep their input order and are not deduplicated: "1-3, 2" produces two
//! outputs, one with pages 1-3 and one with page 2.

use serde::Serialize;

/// Pages destined for a single output document.
///
/// Indices are zero-based and, for a range token, contiguous ascending.
/// A group is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageGroup {
    pages: Vec<usize>,
}

impl PageGroup {
    fn from_range(start: usize, end: usize) -> Self {
        Self {
            pages: (start - 1..end).collect(),
        }
    }

    fn from_single(page: usize) -> Self {
        Self {
            pages: vec![page - 1],
        }
    }

    /// Zero-based page indices, in export order.
    pub fn pages(&self) -> &[usize] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// First page of the group, 1-based.
    pub fn first_page(&self) -> usize {
        self.pages[0] + 1
    }

    /// Last page of the group, 1-based.
    pub fn last_page(&self) -> usize {
        self.pages[self.pages.len() - 1] + 1
    }

    /// Suffix for the output file name: "first-last" for a multi-page
    /// group, the bare page number otherwise.
    pub fn name_suffix(&self) -> String {
        if self.pages.len() > 1 {
            format!("{}-{}", self.first_page(), self.last_page())
        } else {
            self.first_page().to_string()
        }
    }
}

/// Parse a range expression into page groups, one per output document.
///
/// `bound` is the page count of the source document. Tokens that fail to
/// parse, inverted ranges, and references past `bound` degrade silently:
/// a range has its end clipped to `bound`, everything else is dropped.
/// Page numbers below 1 are invalid and drop their token. The caller is
/// responsible for treating an empty result as "no valid pages selected".
///
/// # Examples
/// ```
/// use pdfsplit_core::ranges::parse_ranges;
///
/// let groups = parse_ranges("1-3, 5, 8-10", 10);
/// let pages: Vec<_> = groups.iter().map(|g| g.pages().to_vec()).collect();
/// assert_eq!(pages, vec![vec![0, 1, 2], vec![4], vec![7, 8, 9]]);
/// ```
pub fn parse_ranges(expression: &str, bound: usize) -> Vec<PageGroup> {
    let mut groups = Vec::new();

    for token in expression.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        if let Some((start, end)) = token.split_once('-') {
            // Range like "1-3"
            if let (Ok(start), Ok(end)) = (
                start.trim().parse::<usize>(),
                end.trim().parse::<usize>(),
            ) {
                if start >= 1 && start <= end {
                    let end = end.min(bound);
                    if start <= end {
                        groups.push(PageGroup::from_range(start, end));
                    }
                }
            }
        } else if let Ok(page) = token.parse::<usize>() {
            // Single page like "5"
            if page >= 1 && page <= bound {
                groups.push(PageGroup::from_single(page));
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn indices(groups: &[PageGroup]) -> Vec<Vec<usize>> {
        groups.iter().map(|g| g.pages().to_vec()).collect()
    }

    #[test]
    fn test_single_page() {
        assert_eq!(indices(&parse_ranges("5", 10)), vec![vec![4]]);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(indices(&parse_ranges("2-4", 10)), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_mixed_ranges_and_pages() {
        assert_eq!(
            indices(&parse_ranges("1-3,5,8-10", 10)),
            vec![vec![0, 1, 2], vec![4], vec![7, 8, 9]]
        );
    }

    #[test]
    fn test_empty_expression() {
        assert!(parse_ranges("", 10).is_empty());
        assert!(parse_ranges("  ,  , ", 10).is_empty());
    }

    #[test]
    fn test_inverted_range_dropped() {
        assert!(parse_ranges("5-3", 10).is_empty());
    }

    #[test]
    fn test_range_end_clipped_to_bound() {
        assert_eq!(
            indices(&parse_ranges("1-100", 10)),
            vec![(0..10).collect::<Vec<_>>()]
        );
    }

    #[test]
    fn test_range_start_past_bound_dropped() {
        assert!(parse_ranges("15-20", 10).is_empty());
    }

    #[test]
    fn test_single_page_past_bound_dropped() {
        assert!(parse_ranges("15", 10).is_empty());
    }

    #[test]
    fn test_malformed_token_skipped_valid_kept() {
        assert_eq!(indices(&parse_ranges("abc,2", 5)), vec![vec![1]]);
    }

    #[test]
    fn test_zero_page_dropped() {
        assert!(parse_ranges("0", 10).is_empty());
        assert!(parse_ranges("0-3", 10).is_empty());
    }

    #[test]
    fn test_double_hyphen_dropped() {
        assert!(parse_ranges("1-2-3", 10).is_empty());
    }

    #[test]
    fn test_groups_keep_input_order() {
        assert_eq!(
            indices(&parse_ranges("8-10,1-3", 10)),
            vec![vec![7, 8, 9], vec![0, 1, 2]]
        );
    }

    #[test]
    fn test_duplicate_groups_preserved() {
        assert_eq!(
            indices(&parse_ranges("1,1,1-2", 5)),
            vec![vec![0], vec![0], vec![0, 1]]
        );
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(
            indices(&parse_ranges("  1 - 3 , 5  ", 10)),
            vec![vec![0, 1, 2], vec![4]]
        );
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parse_ranges("1-3, 7, 2-2", 10);
        let second = parse_ranges("1-3, 7, 2-2", 10);
        assert_eq!(first, second);
    }

    #[test]
    fn test_name_suffix_range() {
        let groups = parse_ranges("3-5", 10);
        assert_eq!(groups[0].name_suffix(), "3-5");
    }

    #[test]
    fn test_name_suffix_single() {
        let groups = parse_ranges("4", 10);
        assert_eq!(groups[0].name_suffix(), "4");
    }

    #[test]
    fn test_name_suffix_clipped_range() {
        let groups = parse_ranges("8-20", 10);
        assert_eq!(groups[0].name_suffix(), "8-10");
    }

    #[test]
    fn test_one_page_range_uses_single_suffix() {
        let groups = parse_ranges("7-7", 10);
        assert_eq!(groups[0].name_suffix(), "7");
    }

    #[test]
    fn test_first_and_last_page() {
        let groups = parse_ranges("2-6", 10);
        assert_eq!(groups[0].first_page(), 2);
        assert_eq!(groups[0].last_page(), 6);
        assert_eq!(groups[0].len(), 5);
    }
}
