// `taskdesk checklist` — list the checklist items of a description, with
// the indices used by `summary --checked`.

use std::path::PathBuf;

use clap::Args;
use serde::{Deserialize, Serialize};

use taskdesk_common::document::Sections;

use crate::commands::load_text;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct ChecklistArgs {
    /// Description text file.
    pub file: PathBuf,

    /// Force JSON output.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistResult {
    pub items: Vec<String>,
}

pub fn run(args: ChecklistArgs) -> anyhow::Result<()> {
    let format = OutputFormat::detect(args.json);
    let document = load_text(&args.file)?;
    let sections = Sections::parse(&document);

    let result = ChecklistResult { items: sections.checklist_items };
    output::print_output(format, &result, format_human)?;
    Ok(())
}

fn format_human(result: &ChecklistResult) -> String {
    if result.items.is_empty() {
        return "no checklist items".into();
    }
    result
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{index:>3}  {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
