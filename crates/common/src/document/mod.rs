// The structured ticket-description format.
//
// A description is exactly five named sections in fixed order, each
// introduced by a `## <Heading>` line with a blank line between a body and
// the next heading. An empty body is stored as a single em dash so the
// section stays visible in the raw text. The format is persisted in every
// existing ticket, so it must not drift.

pub mod parser;

pub use parser::{parse_checklist, parse_section, Sections};

/// Placeholder body for an empty section.
pub const EMPTY_BODY: &str = "—";

/// Line prefix that introduces a section heading. Level 2 only — the
/// format has no nesting.
pub const HEADING_MARKER: &str = "## ";

/// The five canonical sections of a ticket description, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Context,
    Checklist,
    LinksAccess,
    DefinitionOfDone,
    Notes,
}

impl Heading {
    pub const ALL: [Heading; 5] = [
        Heading::Context,
        Heading::Checklist,
        Heading::LinksAccess,
        Heading::DefinitionOfDone,
        Heading::Notes,
    ];

    /// Exact heading text as written in stored documents.
    pub fn title(self) -> &'static str {
        match self {
            Heading::Context => "Context",
            Heading::Checklist => "Checklist",
            Heading::LinksAccess => "Links & Access",
            Heading::DefinitionOfDone => "Definition of Done",
            Heading::Notes => "Notes",
        }
    }
}
