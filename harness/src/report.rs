use std::fmt;

use super::pack::CodeWidth;

/// `(original - packed) / original`, where packed is `code_count * bytes_per_code`.
/// Empty input has a ratio of zero.
pub fn compression_ratio(original_len: usize, code_count: usize, bytes_per_code: usize) -> f64 {
    if original_len == 0 {
        return 0.0;
    }

    let old_bytes = original_len as f64;
    let new_bytes = (code_count * bytes_per_code) as f64;

    (old_bytes - new_bytes) / old_bytes
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Passed { code_count: usize },
    Failed(String),
}

/// Result of one round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Zero-based position in the run.
    pub index: usize,
    pub name: String,
    /// Length of the input in bytes.
    pub length: usize,
    pub width: CodeWidth,
    pub outcome: Outcome,
}

impl Report {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, Outcome::Passed { .. })
    }

    pub fn ratio(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Passed { code_count } => Some(compression_ratio(self.length, code_count, self.width.bytes())),
            Outcome::Failed(_) => None,
        }
    }

    /// Ratio as a whole percentage, truncated toward zero.
    pub fn percent(&self) -> Option<i64> {
        self.ratio().map(|ratio| (ratio * 100.0) as i64)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Test: {}, String length: {}", self.index + 1, self.length)?;

        match self.percent() {
            Some(percent) => write!(f, ", Compression ratio: {}%", percent),
            None => write!(f, " **FAIL**"),
        }
    }
}
