// `taskdesk check-template` — run the variable-schema cleanup a template
// save would perform, and report what survives.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use serde::{Deserialize, Serialize};

use taskdesk_common::types::{Template, VariableSpec};
use taskdesk_engine::variables::sanitize_variables;

use crate::commands::load_json;
use crate::exit_code::ExitCode;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct CheckTemplateArgs {
    /// Template JSON file.
    pub template: PathBuf,

    /// Force JSON output.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckTemplateResult {
    pub name: String,
    pub variables: Vec<VariableSpec>,
    /// Entries dropped for missing a key or a label.
    pub dropped: usize,
}

pub fn run(args: CheckTemplateArgs) -> anyhow::Result<()> {
    let format = OutputFormat::detect(args.json);
    let template: Template = load_json(&args.template)?;

    let raw_count = template.content.variables.len();
    match sanitize_variables(template.content.variables)
        .context("template variable schema rejected")
    {
        Ok(variables) => {
            let result = CheckTemplateResult {
                name: template.name,
                dropped: raw_count - variables.len(),
                variables,
            };
            output::print_output(format, &result, format_human)?;
            Ok(())
        }
        Err(err) => {
            output::print_error(format, "DUPLICATE_VARIABLE_KEY", &format!("{err:#}"));
            ExitCode::from_error(&err).exit();
        }
    }
}

fn format_human(result: &CheckTemplateResult) -> String {
    let mut lines = vec![format!("{}: {} variable(s)", result.name, result.variables.len())];
    for spec in &result.variables {
        let required = if spec.required { " (required)" } else { "" };
        lines.push(format!("  {}  {}{required}", spec.key, spec.label));
    }
    if result.dropped > 0 {
        lines.push(format!("  dropped {} incomplete entries", result.dropped));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_format_marks_required_variables() {
        let result = CheckTemplateResult {
            name: "Research brief".into(),
            variables: vec![
                VariableSpec {
                    key: "topic".into(),
                    label: "Topic".into(),
                    placeholder: None,
                    required: true,
                },
                VariableSpec {
                    key: "output".into(),
                    label: "Output link".into(),
                    placeholder: None,
                    required: false,
                },
            ],
            dropped: 1,
        };
        let text = format_human(&result);

        assert!(text.starts_with("Research brief: 2 variable(s)"));
        assert!(text.contains("topic  Topic (required)"));
        assert!(text.contains("output  Output link\n"));
        assert!(text.contains("dropped 1"));
    }
}
