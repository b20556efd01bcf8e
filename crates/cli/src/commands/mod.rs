// CLI subcommand dispatch.

use std::path::Path;

use anyhow::Context as _;
use clap::Subcommand;
use serde::de::DeserializeOwned;

pub mod check_template;
pub mod checklist;
pub mod compose;
pub mod sections;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Compose a ticket description from a template, client, and variables
    Compose(compose::ComposeArgs),
    /// Parse the five canonical sections out of a description
    Sections(sections::SectionsArgs),
    /// List checklist items of a description
    Checklist(checklist::ChecklistArgs),
    /// Build the shareable plain-text summary of a ticket
    Summary(summary::SummaryArgs),
    /// Validate a template's variable schema
    CheckTemplate(check_template::CheckTemplateArgs),
}

pub fn run(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Compose(args) => compose::run(args),
        Command::Sections(args) => sections::run(args),
        Command::Checklist(args) => checklist::run(args),
        Command::Summary(args) => summary::run(args),
        Command::CheckTemplate(args) => check_template::run(args),
    }
}

/// Read and deserialize a JSON record file (template, client, ticket meta).
pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!("loaded {}", path.display());
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

/// Read a description text file.
pub(crate) fn load_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
