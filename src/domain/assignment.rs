// ============================================================
// ROSTER ASSIGNMENT TYPES
// ============================================================
// Data structures representing parsed roster content

use serde::Serialize;

use super::WorkInterval;

/// Rendered value of an id cell that failed integer parsing
pub const UNPARSED_ID: i64 = -1;

/// An employee or project id cell from the roster.
///
/// Malformed numeric text degrades to `Unparsed` instead of dropping the
/// whole row, so one bad cell never discards an otherwise usable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RosterId {
    Known(i64),
    Unparsed,
}

impl RosterId {
    /// Parse an id cell, degrading to `Unparsed` on failure
    pub fn parse(cell: &str) -> Self {
        cell.parse::<i64>().map_or(Self::Unparsed, Self::Known)
    }

    /// Numeric rendering, `Unparsed` maps to the −1 placeholder
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Known(id) => id,
            Self::Unparsed => UNPARSED_ID,
        }
    }

    pub fn is_unparsed(self) -> bool {
        matches!(self, Self::Unparsed)
    }
}

/// One employee's tenure on one project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssignmentRecord {
    pub employee_id: RosterId,
    pub project_id: RosterId,
    pub period: WorkInterval,
}

impl AssignmentRecord {
    /// True when either id cell failed integer parsing.
    ///
    /// Records like this still take part in the overlap scan, matching the
    /// inherited contract; callers that prefer to exclude them can filter on
    /// this before grouping.
    pub fn has_unparsed_id(&self) -> bool {
        self.employee_id.is_unparsed() || self.project_id.is_unparsed()
    }
}

/// All assignments sharing one project id, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectGroup {
    pub project_id: RosterId,
    pub members: Vec<AssignmentRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_id() {
        assert_eq!(RosterId::parse("143"), RosterId::Known(143));
        assert_eq!(RosterId::parse("143").as_i64(), 143);
    }

    #[test]
    fn test_malformed_id_degrades_to_placeholder() {
        let id = RosterId::parse("abc");
        assert!(id.is_unparsed());
        assert_eq!(id.as_i64(), UNPARSED_ID);

        assert!(RosterId::parse("").is_unparsed());
        assert!(RosterId::parse("12.5").is_unparsed());
    }
}
