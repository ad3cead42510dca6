//! Find the pair of employees who worked together longest on a common
//! project, from a CSV roster of assignments.
//!
//! The pipeline is [`OverlapReport`]: read the roster file, parse rows
//! best-effort with tolerant date handling, group assignments by project,
//! then scan every member pair for the longest shared tenure. A GUI or CLI
//! shell plugs in through [`interfaces::shell`].

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use application::OverlapReport;
pub use domain::error::{AppError, Result};
pub use domain::{AssignmentRecord, Overlap, ProjectGroup, RosterId, WorkInterval};
pub use infrastructure::bootstrap::init_logging;
