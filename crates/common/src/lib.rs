// taskdesk-common: shared domain types and the ticket-description parser.

pub mod document;
pub mod types;
