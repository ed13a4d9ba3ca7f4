//! File-header template settings.

use serde::{Deserialize, Serialize};

fn default_author() -> String {
    "author".to_string()
}

fn default_copyright() -> String {
    "copyright-text".to_string()
}

/// Default banner width in characters, including both `/` ends.
const fn default_section_line_length() -> usize {
    99
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeaderConfig {
    /// Pre-filled value of the `author` field.
    #[serde(default = "default_author")]
    pub author: String,

    /// Pre-filled value of the `copyright` field.
    #[serde(default = "default_copyright")]
    pub copyright: String,

    /// Width of the `/*****/` banner lines around the file header.
    #[serde(default = "default_section_line_length")]
    pub section_line_length: usize,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            copyright: default_copyright(),
            section_line_length: default_section_line_length(),
        }
    }
}

impl HeaderConfig {
    /// The full banner line: `/` + `*` x (width - 2) + `/`.
    #[must_use]
    pub fn section_line(&self) -> String {
        format!("/{}/", "*".repeat(self.section_line_length.saturating_sub(2)))
    }
}
