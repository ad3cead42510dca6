// ============================================================
// OVERLAP REPORT USE CASE
// ============================================================
// Orchestrate roster reading, parsing, grouping, and the overlap scan

use std::path::Path;

use tracing::info;

use crate::domain::error::Result;
use crate::domain::Overlap;
use crate::infrastructure::csv::{read_roster, RecordParser};

use super::overlap_finder::find_largest_overlap;
use super::project_grouper::group_by_project;

/// The one-file pipeline: read → parse → group → find.
///
/// Synchronous and self-contained; every run works on freshly allocated
/// records, so concurrent runs over different files need no locking.
pub struct OverlapReport {
    parser: RecordParser,
}

impl Default for OverlapReport {
    fn default() -> Self {
        Self {
            parser: RecordParser::new(),
        }
    }
}

impl OverlapReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured record parser (e.g. one that filters unparsed ids)
    pub fn with_parser(parser: RecordParser) -> Self {
        Self { parser }
    }

    /// Compute the longest pair overlap for one roster file.
    ///
    /// Fails only when the file cannot be read; unusable rows are skipped
    /// during parsing. `Ok(None)` means no pair of employees shared a
    /// positive number of days on any project.
    pub fn run(&self, path: &Path) -> Result<Option<Overlap>> {
        let content = read_roster(path)?;

        let records = self.parser.parse_content(&content);
        let groups = group_by_project(records);
        let found = find_largest_overlap(&groups);

        info!(
            roster = %path.display(),
            projects = groups.len(),
            found = found.is_some(),
            "Processed roster"
        );

        Ok(found)
    }
}
