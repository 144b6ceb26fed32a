// crates/legacy_markers/src/lib.rs

//! Literals that locate the legacy reflection block in `DayDetailModal.tsx`.

/// File edited by the `clean_daydetail` tool, relative to the working directory.
pub const TARGET_FILE: &str = "DayDetailModal.tsx";

/// Opening of the `<ReflectionHub ... />` element. The block we keep ends
/// with the first self-closing delimiter at or after this line.
pub const REFLECTION_HUB_MARKER: &str = "<ReflectionHub";

/// Comment heading the section that survives below the removed block.
pub const SECONDARY_SECTIONS_MARKER: &str = "Secondary Sections - Adaptive Layout";

/// Self-closing tag delimiter.
pub const SELF_CLOSING_TOKEN: &str = "/>";
