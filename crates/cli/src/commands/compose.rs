// `taskdesk compose` — render a ticket description from a template, client,
// and variable values. Stands in for the portal's create-ticket form.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{anyhow, Context as _};
use clap::Args;
use serde::{Deserialize, Serialize};

use taskdesk_common::types::{Client, Template};
use taskdesk_engine::compose::{
    compose, regenerate_links, validate_draft, DraftFields, DraftMeta, TicketDraft,
};
use taskdesk_engine::variables::sync_variable_values;

use crate::commands::load_json;
use crate::exit_code::ExitCode;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct ComposeArgs {
    /// Template JSON file.
    #[arg(long)]
    template: Option<PathBuf>,

    /// Client JSON file.
    #[arg(long)]
    client: Option<PathBuf>,

    /// Variable value, `key=value`. Repeatable.
    #[arg(long = "var", value_name = "KEY=VALUE")]
    vars: Vec<String>,

    /// Ticket title, checked by the submission gate.
    #[arg(long)]
    title: Option<String>,

    /// Override the Context field.
    #[arg(long)]
    context: Option<String>,

    /// Override the Checklist field.
    #[arg(long)]
    checklist: Option<String>,

    /// Override the Definition of Done field.
    #[arg(long = "dod")]
    definition_of_done: Option<String>,

    /// Override the Notes field.
    #[arg(long)]
    notes: Option<String>,

    /// Run the submission gate before printing.
    #[arg(long)]
    check: bool,

    /// Force JSON output.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeResult {
    pub description: String,
    pub task_type: String,
    pub priority: String,
    pub status: String,
    pub effort: String,
}

pub fn run(args: ComposeArgs) -> anyhow::Result<()> {
    let format = OutputFormat::detect(args.json);

    let template: Option<Template> = match &args.template {
        Some(path) => Some(load_json(path)?),
        None => None,
    };
    let client: Option<Client> = match &args.client {
        Some(path) => Some(load_json(path)?),
        None => None,
    };

    let entered = parse_vars(&args.vars)?;
    // With a template selected, only its declared keys exist.
    let vars = match &template {
        Some(template) => sync_variable_values(&template.content.variables, &entered),
        None => entered,
    };

    let mut meta = DraftMeta::default();
    let mut fields = match &template {
        Some(template) => {
            meta.apply_defaults(&template.defaults);
            DraftFields::from_template(template)
        }
        None => DraftFields::default(),
    };

    if let Some(context) = args.context {
        fields.context = context;
    }
    if let Some(checklist) = args.checklist {
        fields.checklist = checklist;
    }
    if let Some(dod) = args.definition_of_done {
        fields.definition_of_done = dod;
    }
    if let Some(notes) = args.notes {
        fields.notes = notes;
    }

    let links_hint = template.as_ref().and_then(|t| t.content.links_hint.as_deref());
    fields.links = regenerate_links(&fields.links, links_hint, client.as_ref(), &vars);

    if args.check {
        let draft = TicketDraft {
            title: args.title.clone().unwrap_or_default(),
            client_id: client.as_ref().map(|c| c.id),
            fields: fields.clone(),
            vars: vars.clone(),
        };
        if let Err(gate) = validate_draft(&draft, template.as_ref(), client.as_ref())
            .context("ticket draft failed validation")
        {
            output::print_error(format, "VALIDATION_FAILED", &format!("{gate:#}"));
            ExitCode::from_error(&gate).exit();
        }
    }

    let result = ComposeResult {
        description: compose(&fields, client.as_ref(), &vars),
        task_type: meta.task_type,
        priority: meta.priority,
        status: meta.status,
        effort: meta.effort,
    };

    output::print_output(format, &result, |r| r.description.clone())?;
    Ok(())
}

/// Parse repeated `key=value` arguments into a variable map.
fn parse_vars(pairs: &[String]) -> anyhow::Result<BTreeMap<String, String>> {
    let mut vars = BTreeMap::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("invalid --var {pair:?}: expected key=value"))?;
        vars.insert(key.trim().to_string(), value.to_string());
    }
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value_pairs() {
        let vars = parse_vars(&["topic=Q1 fuel".into(), " output =https://doc".into()]).unwrap();
        assert_eq!(vars.get("topic").map(String::as_str), Some("Q1 fuel"));
        assert_eq!(vars.get("output").map(String::as_str), Some("https://doc"));
    }

    #[test]
    fn value_may_contain_equals_signs() {
        let vars = parse_vars(&["query=a=b".into()]).unwrap();
        assert_eq!(vars.get("query").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn rejects_pairs_without_equals() {
        assert!(parse_vars(&["topic".into()]).is_err());
    }
}
