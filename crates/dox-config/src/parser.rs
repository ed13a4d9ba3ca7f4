//! Declaration recognizer settings.

use serde::{Deserialize, Serialize};

/// Default number of lines read after the first declaration line.
const fn default_max_lines() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParserConfig {
    /// Lookahead bound when joining a declaration split over several lines.
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_lines: default_max_lines(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(ParserConfig::default().max_lines, 5);
    }
}
