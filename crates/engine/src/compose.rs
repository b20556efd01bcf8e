// Assembles the five-section ticket description from a template selection,
// client, and variable values, and gates submission.
//
// Composition is a one-time transformation: the description is rendered at
// ticket creation and stored; later edits to the template never touch
// already-created tickets.

use std::collections::BTreeMap;

use taskdesk_common::document::{Heading, EMPTY_BODY, HEADING_MARKER};
use taskdesk_common::types::{Client, Template, TemplateDefaults};
use thiserror::Error;
use uuid::Uuid;

use crate::render::render;

/// Hint used for the Links & Access field when a template does not carry
/// its own `links_hint` (or no template is selected).
pub const DEFAULT_LINKS_HINT: &str = "Website: {{client.website_url}}\nWP Admin: {{client.wp_admin_url}}\nDrive: {{client.drive_folder_url}}\nOther: ";

const OTHER_MARKER: &str = "Other:";

/// The five editable base fields of a ticket draft.
///
/// Four of them hold authoring-time text with placeholders still unexpanded;
/// `links` is the exception — it is kept rendered incrementally by
/// [`regenerate_links`] and used as-is at composition time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftFields {
    pub context: String,
    pub checklist: String,
    pub links: String,
    pub definition_of_done: String,
    pub notes: String,
}

impl DraftFields {
    /// Seed the editable fields from a template's content blocks. These are
    /// initial values only — the admin edits them freely afterward and
    /// composition always uses the current text. `links` is left alone; it
    /// is owned by [`regenerate_links`].
    pub fn from_template(template: &Template) -> Self {
        let content = &template.content;
        DraftFields {
            context: content.context.clone().unwrap_or_default(),
            checklist: content.checklist.clone().unwrap_or_default(),
            links: String::new(),
            definition_of_done: content.definition_of_done.clone().unwrap_or_default(),
            notes: content.notes.clone().unwrap_or_default(),
        }
    }
}

/// Ticket meta fields a template's defaults can pre-populate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftMeta {
    pub task_type: String,
    pub priority: String,
    pub status: String,
    pub effort: String,
}

impl Default for DraftMeta {
    fn default() -> Self {
        DraftMeta {
            task_type: "wp".into(),
            priority: "normal".into(),
            status: "backlog".into(),
            effort: "M".into(),
        }
    }
}

impl DraftMeta {
    /// Overlay template defaults; unset defaults keep the current value.
    pub fn apply_defaults(&mut self, defaults: &TemplateDefaults) {
        if let Some(v) = &defaults.task_type {
            self.task_type = v.clone();
        }
        if let Some(v) = &defaults.priority {
            self.priority = v.clone();
        }
        if let Some(v) = &defaults.status {
            self.status = v.clone();
        }
        if let Some(v) = &defaults.effort {
            self.effort = v.clone();
        }
    }
}

/// Rebuild the Links & Access field after the client, template selection,
/// or variable values change.
///
/// The hint is rendered fresh each time, but any free text the admin typed
/// after the `Other:` marker in the current value is carried over, so those
/// edits survive a client or template switch. A rendered hint without an
/// `Other:` marker gets one appended.
pub fn regenerate_links(
    current: &str,
    links_hint: Option<&str>,
    client: Option<&Client>,
    vars: &BTreeMap<String, String>,
) -> String {
    let hint = match links_hint {
        Some(h) if !h.is_empty() => h,
        _ => DEFAULT_LINKS_HINT,
    };

    let preserved = find_other(current)
        .map(|idx| current[idx + OTHER_MARKER.len()..].trim_start())
        .unwrap_or("");

    let mut next = render(hint, client, vars);
    if find_other(&next).is_none() {
        next.push_str("\nOther: ");
    }

    if preserved.is_empty() {
        next
    } else {
        splice_other_tail(&next, preserved)
    }
}

/// Byte offset of the first `Other:` marker, case-insensitively.
fn find_other(text: &str) -> Option<usize> {
    text.as_bytes()
        .windows(OTHER_MARKER.len())
        .position(|window| window.eq_ignore_ascii_case(OTHER_MARKER.as_bytes()))
}

/// Re-attach a preserved free-text tail after a trailing `Other:` marker.
/// A marker that already has content after it is left untouched.
fn splice_other_tail(text: &str, tail: &str) -> String {
    let trimmed = text.trim_end();
    // Compare on bytes: rendered hints routinely end in non-ASCII text
    // (the missing-value dash), so slicing the str at a fixed offset could
    // land inside a multi-byte character.
    let bytes = trimmed.as_bytes();
    if bytes.len() >= OTHER_MARKER.len()
        && bytes[bytes.len() - OTHER_MARKER.len()..].eq_ignore_ascii_case(OTHER_MARKER.as_bytes())
    {
        // The suffix is the ASCII marker, so this offset is a char boundary.
        format!("{}Other: {}", &trimmed[..trimmed.len() - OTHER_MARKER.len()], tail)
    } else {
        text.to_string()
    }
}

/// Render and assemble the canonical five-section description.
///
/// Context, Checklist, Definition of Done, and Notes go through the
/// substitution engine with the current client and variables; Links &
/// Access is taken as-is. Each body is trimmed and an empty one becomes the
/// em-dash placeholder. Byte-identical output for identical inputs.
pub fn compose(fields: &DraftFields, client: Option<&Client>, vars: &BTreeMap<String, String>) -> String {
    let bodies = [
        render(&fields.context, client, vars),
        render(&fields.checklist, client, vars),
        fields.links.clone(),
        render(&fields.definition_of_done, client, vars),
        render(&fields.notes, client, vars),
    ];

    let mut lines: Vec<String> = Vec::with_capacity(Heading::ALL.len() * 3);
    for (heading, body) in Heading::ALL.iter().zip(bodies.iter()) {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("{HEADING_MARKER}{}", heading.title()));
        let body = body.trim();
        lines.push(if body.is_empty() { EMPTY_BODY.to_string() } else { body.to_string() });
    }
    lines.join("\n")
}

/// Everything the admin has entered for a new ticket, as handed to the
/// submission gate.
#[derive(Debug, Clone, Default)]
pub struct TicketDraft {
    pub title: String,
    pub client_id: Option<Uuid>,
    pub fields: DraftFields,
    pub vars: BTreeMap<String, String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("client is required")]
    MissingClient,

    #[error("title is required")]
    MissingTitle,

    #[error("missing required field: {field}")]
    MissingRequiredField { field: String },

    #[error("definition of done is required")]
    MissingDefinitionOfDone,
}

/// Submission gate, run before anything is written.
///
/// Checks run in a fixed order: client, title, required template variables
/// (in list order), then the rendered Definition of Done. The first failure
/// is returned with the offending field named, and the caller keeps all
/// in-progress edits.
pub fn validate_draft(
    draft: &TicketDraft,
    template: Option<&Template>,
    client: Option<&Client>,
) -> Result<(), ComposeError> {
    if draft.client_id.is_none() {
        return Err(ComposeError::MissingClient);
    }
    if draft.title.trim().is_empty() {
        return Err(ComposeError::MissingTitle);
    }

    if let Some(template) = template {
        for spec in &template.content.variables {
            let key = spec.key.trim();
            if key.is_empty() || !spec.required {
                continue;
            }
            let filled = draft
                .vars
                .get(key)
                .map(|value| !value.trim().is_empty())
                .unwrap_or(false);
            if !filled {
                let label = spec.label.trim();
                let field = if label.is_empty() { key } else { label };
                return Err(ComposeError::MissingRequiredField { field: field.to_string() });
            }
        }
    }

    // The gate looks at the *rendered* Definition of Done: a placeholder
    // that resolves to the dash still counts as content.
    let dod = render(&draft.fields.definition_of_done, client, &draft.vars);
    if dod.trim().is_empty() {
        return Err(ComposeError::MissingDefinitionOfDone);
    }

    Ok(())
}
