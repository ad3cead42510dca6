pub mod use_cases;

pub use use_cases::overlap_report::OverlapReport;
