// Recovers structure from stored ticket descriptions.
//
// Descriptions are written once by the composer but may be hand-edited
// afterward, so parsing is strictly best-effort: a missing heading yields an
// empty section and a checklist without bullets degrades to one item per
// line. Nothing in here fails. An explicit line scanner is used instead of
// regular expressions; the behavior is pinned by existing stored tickets.

use serde::{Deserialize, Serialize};

use super::{Heading, EMPTY_BODY};

/// Extract the body of `## <heading>`, up to the next `## ` line or the end
/// of the document, trimmed. Heading matching is case-insensitive. Returns
/// an empty string when the heading is absent, and normalizes a body that
/// is only the em-dash placeholder back to empty.
pub fn parse_section(document: &str, heading: &str) -> String {
    let wanted = heading.trim().to_lowercase();
    let mut body = String::new();
    let mut in_section = false;

    for line in document.lines() {
        if let Some(text) = heading_text(line) {
            if in_section {
                break;
            }
            in_section = text.to_lowercase() == wanted;
            continue;
        }
        if in_section {
            body.push_str(line);
            body.push('\n');
        }
    }

    let body = body.trim();
    if body == EMPTY_BODY {
        return String::new();
    }
    body.to_string()
}

/// The heading text of a `## ` line, or `None` for any other line.
/// `###` and deeper are body content, not structure.
fn heading_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("##")?;
    if rest.starts_with('#') || !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim())
}

/// Split a checklist body into items.
///
/// Bulleted lines (`- ` or `* `) win: when any exist, only they count and
/// everything else is discarded. When none exist, every non-empty line is
/// one item. Order is preserved either way.
pub fn parse_checklist(body: &str) -> Vec<String> {
    let lines: Vec<&str> = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let items: Vec<String> = lines
        .iter()
        .filter_map(|line| line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")))
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();

    if items.is_empty() {
        return lines.into_iter().map(str::to_string).collect();
    }
    items
}

/// All five sections of a description, parsed in one pass, plus the derived
/// checklist items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sections {
    pub context: String,
    pub checklist_text: String,
    pub checklist_items: Vec<String>,
    pub links: String,
    pub definition_of_done: String,
    pub notes: String,
}

impl Sections {
    pub fn parse(document: &str) -> Self {
        let checklist_text = parse_section(document, Heading::Checklist.title());
        let checklist_items = parse_checklist(&checklist_text);

        Sections {
            context: parse_section(document, Heading::Context.title()),
            checklist_text,
            checklist_items,
            links: parse_section(document, Heading::LinksAccess.title()),
            definition_of_done: parse_section(document, Heading::DefinitionOfDone.title()),
            notes: parse_section(document, Heading::Notes.title()),
        }
    }
}
