pub mod overlap_finder;
pub mod overlap_report;
pub mod project_grouper;
