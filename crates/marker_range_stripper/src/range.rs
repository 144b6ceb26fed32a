// crates/marker_range_stripper/src/range.rs

use log::debug;

use crate::document::line_terminator;
use crate::error::StripError;
use crate::markers::{find_markers, MarkerSet};

/// Half-open interval `[keep_until, end_index)` of discarded lines.
///
/// Only built by [`locate_range`], which guarantees
/// `start_index <= keep_until <= end_index < lines.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionRange {
    start_index: usize,
    keep_until: usize,
    end_index: usize,
}

impl DeletionRange {
    /// Line holding the start marker.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// First discarded line; everything above it is kept.
    pub fn keep_until(&self) -> usize {
        self.keep_until
    }

    /// Line holding the end marker, the first line kept after the cut.
    pub fn end_index(&self) -> usize {
        self.end_index
    }

    /// Number of lines actually dropped.
    pub fn len(&self) -> usize {
        self.end_index - self.keep_until
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count shown in the status line: `end_index - keep_until - 1`.
    ///
    /// One less than [`len`](Self::len), since the blank line written in
    /// place of the range is counted against it. It is `-1` when nothing
    /// was dropped.
    pub fn reported_removed(&self) -> isize {
        self.end_index as isize - self.keep_until as isize - 1
    }

    /// True when no closing token was found between the start marker and
    /// the end marker. The start marker's own line is then discarded too.
    pub fn used_fallback(&self) -> bool {
        self.keep_until == self.start_index
    }
}

/// Locates both markers and the end of the kept prefix.
///
/// `keep_until` is the line after the first line at or below the start
/// marker that contains the closing token. The search stops before the end
/// marker; with no such line, `keep_until` falls back to the start marker's
/// index.
pub fn locate_range<S: AsRef<str>>(
    lines: &[S],
    markers: &MarkerSet<'_>,
) -> Result<DeletionRange, StripError> {
    let hits = find_markers(lines, markers)?;

    let keep_until = lines[hits.start_index..hits.end_index]
        .iter()
        .position(|line| line.as_ref().contains(markers.closing_token))
        .map(|offset| hits.start_index + offset + 1)
        .unwrap_or(hits.start_index);

    debug!(
        "deletion range [{}, {}) (start marker at {})",
        keep_until, hits.end_index, hits.start_index
    );

    Ok(DeletionRange {
        start_index: hits.start_index,
        keep_until,
        end_index: hits.end_index,
    })
}

/// Builds `lines[..keep_until]`, one blank line, then `lines[end_index..]`.
///
/// The blank line takes the terminator of the last kept line (or of the end
/// marker line when nothing above the cut is kept), so a CRLF document stays
/// CRLF.
///
/// # Panics
///
/// If `range` was located in a different, shorter document.
pub fn apply_range<S: AsRef<str>>(lines: &[S], range: &DeletionRange) -> Vec<String> {
    let kept = range.keep_until + 1 + lines.len().saturating_sub(range.end_index);
    let blank = lines[..range.keep_until]
        .last()
        .or_else(|| lines.get(range.end_index))
        .map(|line| line_terminator(line.as_ref()))
        .unwrap_or("\n");

    let mut out = Vec::with_capacity(kept);
    out.extend(lines[..range.keep_until].iter().map(|l| l.as_ref().to_string()));
    out.push(blank.to_string());
    out.extend(lines[range.end_index..].iter().map(|l| l.as_ref().to_string()));
    out
}
