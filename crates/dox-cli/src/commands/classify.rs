use anyhow::Context;
use dox_config::DoxConfig;
use dox_core::{Declaration, ParameterPair, SourceText, TextBuffer};
use dox_parser::{Classifier, parse_arguments};
use serde::Serialize;

use crate::cli::root_commands::ClassifyArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::input::{line_offset, read_source};
use crate::output::output;

#[derive(Debug, Serialize)]
struct ClassifyResponse {
    line: usize,
    declaration: Declaration,
    parameters: Vec<ParameterPair>,
}

/// Handle `dox classify`.
pub fn handle(args: &ClassifyArgs, config: &DoxConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let source = read_source(args.file.as_deref())?;
    let response = classify_at(&source, args.line, config.parser.max_lines)?;

    match flags.format {
        OutputFormat::Text => {
            let declaration = &response.declaration;
            println!("{} {}", declaration.kind, declaration.name);
            if let Some(return_type) = &declaration.return_type {
                println!("  return {return_type}");
            }
            for name in declaration.template_params.iter().flat_map(|p| p.iter()) {
                println!("  tparam {name}");
            }
            for pair in &response.parameters {
                println!("  param {} {}", pair.type_text, pair.name);
            }
            Ok(())
        }
        format => output(&response, format),
    }
}

fn classify_at(source: &SourceText, line: usize, max_lines: usize) -> anyhow::Result<ClassifyResponse> {
    let start = line_offset(source, line)?;
    let lookahead = max_lines.saturating_add(1).saturating_mul(2);
    let lines: Vec<&str> = source
        .lines_from(start)
        .take(lookahead)
        .map(|l| l.text)
        .collect();

    let declaration = Classifier::new(max_lines)
        .classify(&lines)
        .with_context(|| format!("no declaration recognized at line {line}"))?;
    let parameters = declaration
        .documentable_args()
        .map(parse_arguments)
        .unwrap_or_default();

    Ok(ClassifyResponse {
        line,
        declaration,
        parameters,
    })
}
