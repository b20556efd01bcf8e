// `taskdesk summary` — build the shareable plain-text digest of a ticket.
//
// The digest is a disposable artifact: it is printed (for the caller to
// pipe to a clipboard tool) and never stored. Checklist marks exist only
// for this invocation.

use std::path::PathBuf;

use clap::Args;
use serde::{Deserialize, Serialize};

use taskdesk_common::document::Sections;
use taskdesk_common::types::TicketMeta;
use taskdesk_engine::summary::{build_summary, ChecklistState};

use crate::commands::{load_json, load_text};
use crate::config::CliConfig;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Ticket meta JSON file.
    pub meta: PathBuf,

    /// Description text file.
    pub description: PathBuf,

    /// Mark checklist item INDEX as done (zero-based). Repeatable.
    #[arg(long = "checked", value_name = "INDEX")]
    checked: Vec<usize>,

    /// Force JSON output.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
}

pub fn run(args: SummaryArgs) -> anyhow::Result<()> {
    let format = OutputFormat::detect(args.json);
    let meta: TicketMeta = load_json(&args.meta)?;
    let document = load_text(&args.description)?;
    let sections = Sections::parse(&document);

    let mut checked = ChecklistState::new();
    for index in args.checked {
        checked.set(index, true);
    }

    let config = CliConfig::load();
    let summary = build_summary(&meta, &sections, &checked, config.portal_base_url.as_deref());

    output::print_output(format, &SummaryResult { summary }, |r| r.summary.clone())?;
    Ok(())
}
