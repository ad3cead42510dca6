// ============================================================
// ROSTER DOMAIN LAYER
// ============================================================
// Core value types for the overlap computation
// No I/O, no async, no mutation after construction

pub mod error;

mod assignment;
mod interval;
mod overlap;

pub use assignment::{AssignmentRecord, ProjectGroup, RosterId, UNPARSED_ID};
pub use interval::WorkInterval;
pub use overlap::Overlap;
