// Shareable plain-text digest of a ticket, built from the parsed sections
// and the session's ephemeral checklist marks.

use std::collections::BTreeMap;

use taskdesk_common::document::Sections;
use taskdesk_common::types::TicketMeta;

/// Per-session checklist marks, keyed by item index.
///
/// View state only: the portal resets it whenever the description is
/// (re)loaded and it is never written back to storage. That non-persistence
/// is a product decision, not an oversight — the description text is the
/// single source of truth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistState {
    checked: BTreeMap<usize, bool>,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, index: usize, checked: bool) {
        self.checked.insert(index, checked);
    }

    /// Unmarked items default to unchecked.
    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(&index).copied().unwrap_or(false)
    }

    /// Called on every document (re)load.
    pub fn reset(&mut self) {
        self.checked.clear();
    }
}

/// Assemble the fixed-order copy-summary digest.
///
/// Header lines always appear; the Links, Context, Checklist, Definition of
/// Done, and Notes blocks only when their parsed body is non-empty, each
/// followed by a blank line. The final line is a stable reference to the
/// ticket, prefixed with `portal_base` when one is configured.
pub fn build_summary(
    meta: &TicketMeta,
    sections: &Sections,
    checked: &ChecklistState,
    portal_base: Option<&str>,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Ticket: {}", meta.title));
    lines.push(format!(
        "Status: {} | Priority: {} | Due: {}",
        meta.status,
        meta.priority,
        meta.due_date.map(|d| d.to_string()).unwrap_or_else(|| "—".into()),
    ));
    lines.push(format!("Client: {}", meta.client_name.as_deref().unwrap_or("—")));
    lines.push(format!("Assigned To: {}", meta.assignee_name.as_deref().unwrap_or("Unknown")));
    lines.push(String::new());

    if !sections.links.is_empty() {
        lines.push("Links:".into());
        lines.push(sections.links.clone());
        lines.push(String::new());
    }

    if !sections.context.is_empty() {
        lines.push("Context:".into());
        lines.push(sections.context.clone());
        lines.push(String::new());
    }

    if !sections.checklist_items.is_empty() {
        lines.push("Checklist:".into());
        for (index, item) in sections.checklist_items.iter().enumerate() {
            let mark = if checked.is_checked(index) { "[x]" } else { "[ ]" };
            lines.push(format!("{mark} {item}"));
        }
        lines.push(String::new());
    }

    if !sections.definition_of_done.is_empty() {
        lines.push("Definition of Done:".into());
        lines.push(sections.definition_of_done.clone());
        lines.push(String::new());
    }

    if !sections.notes.is_empty() {
        lines.push("Notes:".into());
        lines.push(sections.notes.clone());
        lines.push(String::new());
    }

    let base = portal_base.unwrap_or("").trim_end_matches('/');
    lines.push(format!("Link: {base}/tickets/{}", meta.id));

    lines.join("\n")
}
