// crates/clean_daydetail/src/report.rs

/// The single status line printed after a run.
pub fn status_line(removed: Option<isize>) -> String {
    match removed {
        Some(count) => format!("Cleaned file - removed {} lines of legacy code", count),
        None => "Could not find markers in file".to_string(),
    }
}
