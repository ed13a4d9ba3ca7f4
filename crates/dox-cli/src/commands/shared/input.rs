use std::path::Path;

use anyhow::Context;
use dox_core::SourceText;

/// Read a source document from `path`, or stdin when it is absent or `-`.
pub fn read_source(path: Option<&Path>) -> anyhow::Result<SourceText> {
    match path {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(SourceText::new(text))
        }
        _ => {
            let text =
                std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?;
            Ok(SourceText::new(text))
        }
    }
}

/// Byte offset of the start of 1-based `line`.
pub fn line_offset(source: &SourceText, line: usize) -> anyhow::Result<usize> {
    anyhow::ensure!(line >= 1, "line numbers start at 1");
    source
        .offset_of_line(line - 1)
        .with_context(|| format!("line {line} is past the end of the input"))
}
