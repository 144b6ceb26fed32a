// crates/marker_range_stripper/src/markers.rs

use legacy_markers::{REFLECTION_HUB_MARKER, SECONDARY_SECTIONS_MARKER, SELF_CLOSING_TOKEN};
use log::debug;

use crate::error::StripError;

/// The three literals that drive a strip.
///
/// * `start` – first line of the region whose beginning is kept.
/// * `end` – first line of the region kept after the cut.
/// * `closing_token` – ends the kept prefix that begins at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSet<'a> {
    pub start: &'a str,
    pub end: &'a str,
    pub closing_token: &'a str,
}

impl<'a> MarkerSet<'a> {
    pub fn new(start: &'a str, end: &'a str, closing_token: &'a str) -> Self {
        Self {
            start,
            end,
            closing_token,
        }
    }
}

/// The `<ReflectionHub ... />` / "Secondary Sections" pair.
impl Default for MarkerSet<'static> {
    fn default() -> Self {
        Self::new(REFLECTION_HUB_MARKER, SECONDARY_SECTIONS_MARKER, SELF_CLOSING_TOKEN)
    }
}

/// Line indices of the first start marker and the first end marker after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerHits {
    pub start_index: usize,
    pub end_index: usize,
}

/// Scans top to bottom for both markers.
///
/// The first line containing `start` wins. A line that contains `start` is
/// never taken as the end marker. The scan stops at the first line that
/// contains `end`, so a start marker appearing only after that line is
/// reported as missing.
pub fn find_markers<S: AsRef<str>>(
    lines: &[S],
    markers: &MarkerSet<'_>,
) -> Result<MarkerHits, StripError> {
    let mut start_index = None;
    let mut end_index = None;

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if line.contains(markers.start) {
            if start_index.is_none() {
                debug!("start marker {:?} at line {}", markers.start, i);
                start_index = Some(i);
            }
        } else if line.contains(markers.end) {
            debug!("end marker {:?} at line {}", markers.end, i);
            end_index = Some(i);
            break;
        }
    }

    match (start_index, end_index) {
        (Some(start_index), Some(end_index)) => Ok(MarkerHits {
            start_index,
            end_index,
        }),
        (start, end) => Err(StripError::MarkersNotFound {
            start_found: start.is_some(),
            end_found: end.is_some(),
        }),
    }
}
