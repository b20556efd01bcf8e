// Core domain types shared across all taskdesk crates.
//
// These mirror the records held by the external storage backend (clients,
// ticket templates, tickets). Field names in the persisted JSON use the
// backend's casing, hence the serde renames on template payloads.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ticket workflow states, in board order.
pub const STATUSES: &[&str] = &[
    "backlog",
    "ready",
    "in_progress",
    "blocked",
    "review",
    "done",
    "archived",
];

pub const PRIORITIES: &[&str] = &["critical", "high", "normal", "low"];

pub const TASK_TYPES: &[&str] = &["wp", "research", "data", "admin", "monitoring", "other"];

pub const EFFORTS: &[&str] = &["S", "M", "L", "XL"];

/// Template categories offered by the admin tooling.
pub const CATEGORIES: &[&str] = &[
    "general",
    "research",
    "wp",
    "data",
    "admin",
    "monitoring",
    "other",
];

/// A client the team does work for. The URL fields feed the
/// `{{client.*}}` placeholder family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub website_url: Option<String>,
    pub wp_admin_url: Option<String>,
    pub drive_folder_url: Option<String>,
}

/// A named input slot a template exposes to the ticket-creation flow.
///
/// `key` is the identifier used in `{{var.<key>}}` placeholders; `label` is
/// the display name. Keys are unique within one template's variable list —
/// `sanitize_variables` enforces that before a template is saved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariableSpec {
    pub key: String,
    pub label: String,
    /// Hint text shown in the empty input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
}

/// Ticket meta fields a template pre-populates on selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateDefaults {
    pub task_type: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub effort: Option<String>,
}

/// The free-text content blocks and variable schema of a template.
///
/// All text blocks may contain `{{client.*}}` / `{{var.*}}` placeholders;
/// they are substituted at composition time, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateContent {
    pub context: Option<String>,
    pub checklist: Option<String>,
    /// Seed text for the Links & Access field. When absent, the composer
    /// falls back to its built-in hint.
    pub links_hint: Option<String>,
    pub definition_of_done: Option<String>,
    pub notes: Option<String>,
    pub variables: Vec<VariableSpec>,
}

/// A reusable ticket template. Owned by the admin tooling; the composer
/// only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    /// `None` means the template is global rather than client-specific.
    pub client_id: Option<Uuid>,
    #[serde(default)]
    pub defaults: TemplateDefaults,
    #[serde(default)]
    pub content: TemplateContent,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The slice of the external ticket record the summary builder reads.
/// Names are already resolved — the summary never looks up profiles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketMeta {
    pub id: Uuid,
    pub title: String,
    pub status: String,
    pub priority: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub assignee_name: Option<String>,
}
