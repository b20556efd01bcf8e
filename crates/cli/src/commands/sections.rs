// `taskdesk sections` — parse the five canonical sections of a stored
// description.

use std::path::PathBuf;

use clap::Args;

use taskdesk_common::document::{Heading, Sections};

use crate::commands::load_text;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct SectionsArgs {
    /// Description text file.
    pub file: PathBuf,

    /// Force JSON output.
    #[arg(long)]
    json: bool,
}

pub fn run(args: SectionsArgs) -> anyhow::Result<()> {
    let format = OutputFormat::detect(args.json);
    let document = load_text(&args.file)?;
    let sections = Sections::parse(&document);

    output::print_output(format, &sections, format_human)?;
    Ok(())
}

fn format_human(sections: &Sections) -> String {
    let mut lines = Vec::new();
    for heading in Heading::ALL {
        let body = match heading {
            Heading::Context => &sections.context,
            Heading::Checklist => &sections.checklist_text,
            Heading::LinksAccess => &sections.links,
            Heading::DefinitionOfDone => &sections.definition_of_done,
            Heading::Notes => &sections.notes,
        };
        lines.push(format!("{}:", heading.title()));
        if body.is_empty() {
            lines.push("  (empty)".into());
        } else {
            for line in body.lines() {
                lines.push(format!("  {line}"));
            }
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_format_lists_all_headings() {
        let sections = Sections {
            context: "Audit".into(),
            checklist_text: "- a".into(),
            checklist_items: vec!["a".into()],
            links: String::new(),
            definition_of_done: "Report".into(),
            notes: String::new(),
        };
        let text = format_human(&sections);

        assert!(text.contains("Context:\n  Audit"));
        assert!(text.contains("Checklist:\n  - a"));
        assert!(text.contains("Links & Access:\n  (empty)"));
        assert!(text.contains("Definition of Done:\n  Report"));
        assert!(text.contains("Notes:\n  (empty)"));
    }
}
