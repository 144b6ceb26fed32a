// crates/marker_range_stripper/src/document.rs

/// Splits text into lines, keeping each line's terminator (`\n` or `\r\n`).
///
/// Joining the result with [`join_lines`] reproduces the input exactly. The
/// last line has no terminator when the text does not end with a newline.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

/// Concatenates lines that already carry their terminators.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.as_ref().len()).sum());
    for line in lines {
        out.push_str(line.as_ref());
    }
    out
}

/// `"\r\n"` for CRLF lines, `"\n"` otherwise (including unterminated lines).
pub fn line_terminator(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}
