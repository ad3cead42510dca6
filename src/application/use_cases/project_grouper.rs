// ============================================================
// PROJECT GROUPER
// ============================================================
// Partition assignment records by project id

use std::collections::HashMap;

use crate::domain::{AssignmentRecord, ProjectGroup};

/// Partition records into one group per distinct project id.
///
/// Groups appear in order of first appearance in the input, and members
/// keep the relative order they arrived in. Records whose project id
/// failed parsing all share the placeholder group.
pub fn group_by_project(records: Vec<AssignmentRecord>) -> Vec<ProjectGroup> {
    let mut groups: Vec<ProjectGroup> = Vec::new();
    let mut index_by_id: HashMap<i64, usize> = HashMap::new();

    for record in records {
        match index_by_id.get(&record.project_id.as_i64()) {
            Some(&at) => groups[at].members.push(record),
            None => {
                index_by_id.insert(record.project_id.as_i64(), groups.len());
                groups.push(ProjectGroup {
                    project_id: record.project_id,
                    members: vec![record],
                });
            }
        }
    }

    groups
}
