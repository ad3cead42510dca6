// ============================================================
// RECORD PARSER
// ============================================================
// Turn raw roster rows into typed assignment records, best-effort

use chrono::Utc;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::domain::{AssignmentRecord, RosterId, WorkInterval};
use crate::shared::date_parser::parse_date;

/// Column positions of the roster contract
const COL_EMPLOYEE_ID: usize = 0;
const COL_PROJECT_ID: usize = 1;
const COL_DATE_FROM: usize = 2;
const COL_DATE_TO: usize = 3;

/// Best-effort roster row parser.
///
/// The first row of input is always discarded as a header, regardless of
/// content. Every cell has all space characters stripped, including
/// internal ones; cells are addressed by fixed column position, so a cell
/// that strips to empty is a missing value and never shifts later columns.
/// No row is ever a fatal error: unusable rows are skipped with a log line,
/// and malformed id cells degrade to [`RosterId::Unparsed`] instead of
/// discarding the row.
pub struct RecordParser {
    /// Exclude records whose id cells failed integer parsing
    drop_unparsed_ids: bool,
}

impl Default for RecordParser {
    fn default() -> Self {
        Self {
            drop_unparsed_ids: false,
        }
    }
}

impl RecordParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter out records carrying an unparsed id instead of keeping them
    pub fn with_drop_unparsed_ids(mut self, drop: bool) -> Self {
        self.drop_unparsed_ids = drop;
        self
    }

    /// Parse roster text into assignment records
    pub fn parse_content(&self, content: &str) -> Vec<AssignmentRecord> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .trim(Trim::None)
            .from_reader(content.as_bytes());

        let mut records = Vec::new();

        for (index, row) in reader.records().enumerate() {
            // Data rows start after the discarded header
            let line = index + 2;

            let row = match row {
                Ok(row) => row,
                Err(err) => {
                    warn!(line, error = %err, "Skipping unreadable roster row");
                    continue;
                }
            };

            if let Some(record) = self.parse_row(line, &row) {
                if self.drop_unparsed_ids && record.has_unparsed_id() {
                    warn!(line, "Dropping record with unparsed id");
                    continue;
                }
                records.push(record);
            }
        }

        records
    }

    fn parse_row(&self, line: usize, row: &StringRecord) -> Option<AssignmentRecord> {
        if row.len() < 3 {
            warn!(line, fields = row.len(), "Skipping row with too few fields");
            return None;
        }

        let employee_id = self.parse_id(line, row, COL_EMPLOYEE_ID, "employee");
        let project_id = self.parse_id(line, row, COL_PROJECT_ID, "project");

        let start_cell = match cell(row, COL_DATE_FROM) {
            Some(start_cell) => start_cell,
            None => {
                warn!(line, "Skipping row with missing start date");
                return None;
            }
        };
        let start = match parse_date(&start_cell) {
            Ok(start) => start,
            Err(err) => {
                warn!(line, cell = %start_cell, error = %err, "Skipping row with unparsable start date");
                return None;
            }
        };

        // A missing, empty, or unparsable end date means the assignment is
        // still running; the end falls back to "now", captured per record.
        let end = match cell(row, COL_DATE_TO) {
            Some(end_cell) => match parse_date(&end_cell) {
                Ok(end) => end,
                Err(_) => {
                    debug!(line, cell = %end_cell, "End date unparsable, assignment treated as ongoing");
                    Utc::now()
                }
            },
            None => Utc::now(),
        };

        let Some(period) = WorkInterval::new(start, end) else {
            warn!(line, %start, %end, "Skipping row with end date before start date");
            return None;
        };

        Some(AssignmentRecord {
            employee_id,
            project_id,
            period,
        })
    }

    fn parse_id(&self, line: usize, row: &StringRecord, pos: usize, label: &str) -> RosterId {
        let raw = cell(row, pos).unwrap_or_default();
        let id = RosterId::parse(&raw);
        if id.is_unparsed() {
            warn!(line, cell = %raw, "Coercing unparsable {} id to placeholder", label);
        }
        id
    }
}

/// Space-stripped cell at a fixed position, `None` when absent or blank
fn cell(row: &StringRecord, pos: usize) -> Option<String> {
    let stripped: String = row.get(pos)?.chars().filter(|c| *c != ' ').collect();
    if stripped.is_empty() {
        None
    } else {
        Some(stripped)
    }
}
