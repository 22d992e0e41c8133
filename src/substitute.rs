//! Placeholder substitution
//!
//! Scans a sequence of lines for the first occurrence of the eight-`x`
//! placeholder and replaces it. This is a pure transformation: the input is
//! never modified and "not found" is reported through the result, not as an
//! error.

/// The placeholder token: exactly eight lowercase `x` characters
pub const PLACEHOLDER: &str = "xxxxxxxx";

/// Outcome of a substitution pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Output lines, identical to the input except for at most one line
    pub lines: Vec<String>,
    /// Zero-based index of the modified line, if any
    pub line: Option<usize>,
}

impl Substitution {
    /// Whether a placeholder was found and replaced
    pub fn found(&self) -> bool {
        self.line.is_some()
    }

    /// The modified line, if a replacement happened
    pub fn modified_line(&self) -> Option<&str> {
        self.line.map(|i| self.lines[i].as_str())
    }
}

/// Replace the first placeholder in `lines` with `replacement`
///
/// Only the first line containing the placeholder is touched, and within it
/// only the leftmost occurrence. A longer run of `x` characters matches at its
/// first eight characters; the rest of the run stays in place.
pub fn substitute(lines: &[String], replacement: &str) -> Substitution {
    let mut output = lines.to_vec();

    let line = output
        .iter()
        .position(|line| line.contains(PLACEHOLDER));

    if let Some(index) = line {
        output[index] = output[index].replacen(PLACEHOLDER, replacement, 1);
        crate::debug_context!("substitute", "Replaced placeholder on line {}", index + 1);
    }

    Substitution { lines: output, line }
}
