// crates/marker_range_stripper/src/lib.rs

//! Removes the block of lines between two textual markers, leaving a single
//! blank line in its place.
//!
//! The document is treated as opaque text: a marker matches any line that
//! contains it as a substring.
//!
//! ```
//! use marker_range_stripper::{strip, MarkerSet};
//!
//! let lines = ["<Hub a=1 />\n", "old\n", "// keep\n"];
//! let outcome = strip(&lines, &MarkerSet::new("<Hub", "// keep", "/>"));
//! assert_eq!(outcome.lines, vec!["<Hub a=1 />\n", "\n", "// keep\n"]);
//! assert_eq!(outcome.removed, Some(0));
//! ```

pub mod document;
pub mod error;
pub mod markers;
pub mod range;
pub mod store;
mod stripper;

pub use document::{join_lines, line_terminator, split_lines};
pub use error::StripError;
pub use markers::{find_markers, MarkerHits, MarkerSet};
pub use range::{apply_range, locate_range, DeletionRange};
pub use store::{strip_file, strip_file_with_store, DocumentStore, FsDocumentStore};
pub use stripper::{strip, StripOutcome};
