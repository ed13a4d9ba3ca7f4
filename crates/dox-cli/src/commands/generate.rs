use anyhow::Context;
use dox_config::DoxConfig;
use dox_core::SourceText;
use dox_snippet::{Generator, Outcome};
use serde::Serialize;

use crate::cli::root_commands::GenerateArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::input::{line_offset, read_source};
use crate::output::output;

#[derive(Debug, Serialize)]
struct GenerateResponse {
    cursor: usize,
    #[serde(flatten)]
    outcome: Outcome,
}

/// Handle `dox generate`.
pub fn handle(args: &GenerateArgs, config: &DoxConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let source = read_source(args.file.as_deref())?;
    let cursor = resolve_cursor(&source, args)?;
    let outcome = Generator::new(config).generate(&source, cursor);

    if let Some(message) = outcome.status_message()
        && !flags.quiet
    {
        eprintln!("dox: {message}");
    }

    match flags.format {
        OutputFormat::Text => {
            if let Some(text) = outcome.text() {
                println!("{text}");
            }
            Ok(())
        }
        format => output(&GenerateResponse { cursor, outcome }, format),
    }
}

fn resolve_cursor(source: &SourceText, args: &GenerateArgs) -> anyhow::Result<usize> {
    if let Some(offset) = args.offset {
        return Ok(offset);
    }
    if let Some(line) = args.line {
        return line_offset(source, line);
    }
    source
        .as_str()
        .find("/**")
        .context("no `/**` opener found; pass --line or --offset")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(line: Option<usize>, offset: Option<usize>) -> GenerateArgs {
        GenerateArgs {
            file: None,
            line,
            offset,
        }
    }

    #[test]
    fn cursor_defaults_to_first_opener() {
        let source = SourceText::from("#pragma once\n/**\nint f();\n");
        assert_eq!(resolve_cursor(&source, &args(None, None)).unwrap(), 13);
    }

    #[test]
    fn explicit_line_and_offset() {
        let source = SourceText::from("a\n/**\nint f();\n");
        assert_eq!(resolve_cursor(&source, &args(Some(2), None)).unwrap(), 2);
        assert_eq!(resolve_cursor(&source, &args(None, Some(4))).unwrap(), 4);
    }

    #[test]
    fn missing_opener_is_an_error() {
        let source = SourceText::from("int f();\n");
        let err = resolve_cursor(&source, &args(None, None)).unwrap_err();
        assert!(err.to_string().contains("--line"));
    }

    #[test]
    fn response_flattens_outcome() {
        let config = DoxConfig::default();
        let source = SourceText::from("//\n/**\nint f(int a);\n");
        let outcome = Generator::new(&config).generate(&source, 3);

        let json = serde_json::to_value(GenerateResponse { cursor: 3, outcome }).unwrap();
        assert_eq!(json["cursor"], 3);
        assert_eq!(json["outcome"], "documented");
        assert_eq!(json["declaration"]["name"], "f");
        assert_eq!(json["declaration"]["kind"], "function");
    }
}
