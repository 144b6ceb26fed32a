// crates/marker_range_stripper/src/stripper.rs

use log::{info, warn};

use crate::markers::MarkerSet;
use crate::range::{apply_range, locate_range, DeletionRange};

/// Result of a strip. When the markers were missing, `lines` is an
/// unchanged copy of the input and both `range` and `removed` are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    pub lines: Vec<String>,
    pub range: Option<DeletionRange>,
    /// `end_index - keep_until - 1`, as reported to the user.
    pub removed: Option<isize>,
}

impl StripOutcome {
    pub fn markers_found(&self) -> bool {
        self.range.is_some()
    }
}

/// Replaces the lines between the kept `start ... closing_token` prefix and
/// the end marker with a single blank line.
///
/// Never fails: missing markers are logged and the input comes back as is.
pub fn strip<S: AsRef<str>>(lines: &[S], markers: &MarkerSet<'_>) -> StripOutcome {
    match locate_range(lines, markers) {
        Ok(range) => {
            if range.used_fallback() {
                warn!(
                    "no {:?} between line {} and line {}; the start marker line is removed too",
                    markers.closing_token,
                    range.start_index(),
                    range.end_index()
                );
            }
            info!(
                "removing lines {}..{} ({} reported)",
                range.keep_until(),
                range.end_index(),
                range.reported_removed()
            );
            StripOutcome {
                lines: apply_range(lines, &range),
                range: Some(range),
                removed: Some(range.reported_removed()),
            }
        }
        Err(err) => {
            warn!("{}", err);
            StripOutcome {
                lines: lines.iter().map(|l| l.as_ref().to_string()).collect(),
                range: None,
                removed: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<&'static str> {
        vec![
            "A\n",
            "<ReflectionHub foo=1\n",
            "  bar=2 />\n",
            "X\n",
            "Y\n",
            "// Secondary Sections - Adaptive Layout\n",
            "Z\n",
        ]
    }

    #[test]
    fn test_reflection_hub_scenario() {
        let outcome = strip(&scenario(), &MarkerSet::default());
        assert_eq!(
            outcome.lines,
            vec![
                "A\n",
                "<ReflectionHub foo=1\n",
                "  bar=2 />\n",
                "\n",
                "// Secondary Sections - Adaptive Layout\n",
                "Z\n",
            ]
        );
        assert_eq!(outcome.removed, Some(1));
        let range = outcome.range.unwrap();
        assert_eq!(
            (range.start_index(), range.keep_until(), range.end_index()),
            (1, 3, 5)
        );
    }

    #[test]
    fn test_output_length_matches_reported_count() {
        let input = scenario();
        let outcome = strip(&input, &MarkerSet::default());
        let removed = outcome.removed.unwrap();
        assert_eq!(outcome.lines.len() as isize, input.len() as isize - removed);
    }

    #[test]
    fn test_second_run_leaves_document_unchanged() {
        let first = strip(&scenario(), &MarkerSet::default());
        let second = strip(&first.lines, &MarkerSet::default());
        assert_eq!(second.lines, first.lines);
        assert_eq!(second.removed, Some(0));
    }

    #[test]
    fn test_missing_start_marker_is_noop() {
        let input = vec!["A\n", "// Secondary Sections - Adaptive Layout\n"];
        let outcome = strip(&input, &MarkerSet::default());
        assert_eq!(outcome.lines, input);
        assert_eq!(outcome.removed, None);
        assert!(!outcome.markers_found());
    }

    #[test]
    fn test_missing_end_marker_is_noop() {
        let input = vec!["<ReflectionHub />\n", "X\n"];
        let outcome = strip(&input, &MarkerSet::default());
        assert_eq!(outcome.lines, input);
        assert_eq!(outcome.removed, None);
    }

    // Known quirk: no closing tag before the end marker drops the start line.
    #[test]
    fn test_no_closing_tag_discards_start_line() {
        let input = vec![
            "A\n",
            "<ReflectionHub foo=1\n",
            "X\n",
            "// Secondary Sections - Adaptive Layout\n",
        ];
        let outcome = strip(&input, &MarkerSet::default());
        assert_eq!(
            outcome.lines,
            vec!["A\n", "\n", "// Secondary Sections - Adaptive Layout\n"]
        );
        assert_eq!(outcome.removed, Some(1));
        assert!(outcome.range.unwrap().used_fallback());
    }

    // After a fallback run the start marker line is gone, so the markers can
    // no longer be found together.
    #[test]
    fn test_second_run_after_fallback_finds_no_markers() {
        let input = vec![
            "A\n",
            "<ReflectionHub foo=1\n",
            "X\n",
            "// Secondary Sections - Adaptive Layout\n",
        ];
        let first = strip(&input, &MarkerSet::default());
        assert_eq!(
            first.lines,
            vec!["A\n", "\n", "// Secondary Sections - Adaptive Layout\n"]
        );
        assert_eq!(first.removed, Some(1));

        let second = strip(&first.lines, &MarkerSet::default());
        assert_eq!(second.lines, first.lines);
        assert_eq!(second.removed, None);
        assert!(!second.markers_found());
    }

    #[test]
    fn test_closing_tag_directly_above_end_marker() {
        let input = vec![
            "<ReflectionHub />\n",
            "// Secondary Sections - Adaptive Layout\n",
        ];
        let first = strip(&input, &MarkerSet::default());
        assert_eq!(
            first.lines,
            vec![
                "<ReflectionHub />\n",
                "\n",
                "// Secondary Sections - Adaptive Layout\n",
            ]
        );
        assert_eq!(first.removed, Some(-1));
        assert!(first.range.unwrap().is_empty());

        let second = strip(&first.lines, &MarkerSet::default());
        assert_eq!(second.lines, first.lines);
        assert_eq!(second.removed, Some(0));
    }

    #[test]
    fn test_empty_document() {
        let input: Vec<String> = Vec::new();
        let outcome = strip(&input, &MarkerSet::default());
        assert!(outcome.lines.is_empty());
        assert_eq!(outcome.removed, None);
    }
}
