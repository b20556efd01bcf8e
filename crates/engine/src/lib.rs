// taskdesk-engine: the ticket-description composition pipeline.
//
// Pure, synchronous transformations only. Inputs arrive as explicit
// arguments (no ambient state) and every function is deterministic, so the
// engine can be called from any number of independent sessions without
// coordination.

pub mod compose;
pub mod render;
pub mod summary;
pub mod variables;
