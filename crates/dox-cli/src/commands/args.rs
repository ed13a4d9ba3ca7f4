use dox_core::{ParameterPair, TemplateParams};
use dox_parser::{extract_arguments, extract_template_params, normalize_arguments};
use serde::Serialize;

use crate::cli::root_commands::ExtractArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ArgsResponse {
    Parameters {
        normalized: String,
        parameters: Vec<ParameterPair>,
    },
    Template {
        names: TemplateParams,
    },
}

/// Handle `dox args`.
pub fn handle(args: &ExtractArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = extract(&args.text, args.template);

    match flags.format {
        OutputFormat::Text => {
            match &response {
                ArgsResponse::Parameters { parameters, .. } => {
                    for pair in parameters {
                        println!("{}\t{}", pair.type_text, pair.name);
                    }
                }
                ArgsResponse::Template { names } => {
                    for name in names.iter() {
                        println!("{name}");
                    }
                }
            }
            Ok(())
        }
        format => output(&response, format),
    }
}

fn extract(text: &str, template: bool) -> ArgsResponse {
    if template {
        return ArgsResponse::Template {
            names: extract_template_params(text),
        };
    }
    let normalized = normalize_arguments(text);
    let parameters = extract_arguments(&normalized);
    ArgsResponse::Parameters {
        normalized,
        parameters,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parameter_list_reports_normalized_text() {
        let json = serde_json::to_value(extract("const std::string& name, int n", false)).unwrap();
        assert_eq!(json["normalized"], "string name, int n");
        assert_eq!(json["parameters"][0]["name"], "name");
        assert_eq!(json["parameters"][1]["type_text"], "int");
    }

    #[test]
    fn template_list_reports_names() {
        let json = serde_json::to_value(extract("typename T, class U = int", true)).unwrap();
        assert_eq!(json["names"], serde_json::json!(["T", "U"]));
    }
}
