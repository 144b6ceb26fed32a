// crates/marker_range_stripper/src/error.rs

use std::fmt;

/// The only failure the stripper reports. It is not fatal: the document is
/// left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    MarkersNotFound { start_found: bool, end_found: bool },
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StripError::MarkersNotFound { start_found, end_found } => {
                let missing = match (*start_found, *end_found) {
                    (false, false) => "start and end markers",
                    (false, true) => "start marker",
                    (true, false) => "end marker",
                    (true, true) => "markers",
                };
                write!(f, "Could not find {} in document", missing)
            }
        }
    }
}

impl std::error::Error for StripError {}
