// ============================================================
// OVERLAP FINDER
// ============================================================
// Pairwise scan for the longest shared tenure across all projects

use crate::domain::{Overlap, ProjectGroup};

/// Find the pair of employees with the most overlapping whole days on a
/// common project.
///
/// Every unordered member pair of every group is checked in nested-loop
/// order (groups in first-appearance order, outer member index ascending,
/// inner indexes after it), and a candidate replaces the running best only
/// when its day count is strictly greater. Ties therefore keep the first
/// pair encountered, which makes the result deterministic. Returns `None`
/// when no pair shares a positive number of days — groups with fewer than
/// two members contribute nothing, and a zero-day touch is not a find.
pub fn find_largest_overlap(groups: &[ProjectGroup]) -> Option<Overlap> {
    let mut best: Option<Overlap> = None;
    let mut best_days = 0u64;

    for group in groups {
        for (i, first) in group.members.iter().enumerate() {
            for second in &group.members[i + 1..] {
                let Some(shared) = first.period.intersection(&second.period) else {
                    continue;
                };

                let days = shared.whole_days();
                if days > best_days {
                    best_days = days;
                    best = Some(Overlap {
                        first_employee_id: first.employee_id.as_i64(),
                        second_employee_id: second.employee_id.as_i64(),
                        project_id: group.project_id.as_i64(),
                        days_together: days,
                    });
                }
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssignmentRecord, RosterId, WorkInterval};
    use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN)
            .and_utc()
    }

    fn member(employee: i64, start: DateTime<Utc>, end: DateTime<Utc>) -> AssignmentRecord {
        AssignmentRecord {
            employee_id: RosterId::Known(employee),
            project_id: RosterId::Known(0),
            period: WorkInterval::new(start, end).unwrap(),
        }
    }

    fn group(project: i64, members: Vec<AssignmentRecord>) -> ProjectGroup {
        let members = members
            .into_iter()
            .map(|mut m| {
                m.project_id = RosterId::Known(project);
                m
            })
            .collect();
        ProjectGroup {
            project_id: RosterId::Known(project),
            members,
        }
    }

    #[test]
    fn test_picks_longest_pair_across_groups() {
        let groups = vec![
            group(
                12,
                vec![
                    member(143, day(2013, 11, 1), day(2014, 1, 5)),
                    member(218, day(2012, 11, 1), day(2014, 5, 20)),
                ],
            ),
            group(
                15,
                vec![
                    member(143, day(2010, 3, 12), day(2012, 8, 30)),
                    member(218, day(2011, 6, 5), day(2013, 9, 10)),
                ],
            ),
        ];

        assert_eq!(
            find_largest_overlap(&groups),
            Some(Overlap {
                first_employee_id: 143,
                second_employee_id: 218,
                project_id: 15,
                days_together: 452,
            })
        );
    }

    #[test]
    fn test_disjoint_members_yield_none() {
        let groups = vec![group(
            10,
            vec![
                member(143, day(2009, 1, 1), day(2011, 4, 27)),
                member(218, day(2012, 5, 16), day(2013, 1, 1)),
            ],
        )];
        assert_eq!(find_largest_overlap(&groups), None);
    }

    #[test]
    fn test_small_groups_contribute_nothing() {
        let groups = vec![
            group(10, vec![]),
            group(12, vec![member(143, day(2013, 1, 1), day(2014, 1, 1))]),
        ];
        assert_eq!(find_largest_overlap(&groups), None);
    }

    #[test]
    fn test_zero_day_touch_is_not_a_find() {
        // The intervals touch at a single midnight, a zero whole-day share
        let groups = vec![group(
            10,
            vec![
                member(1, day(2023, 1, 1), day(2023, 1, 5)),
                member(2, day(2023, 1, 5), day(2023, 1, 10)),
            ],
        )];
        assert_eq!(find_largest_overlap(&groups), None);
    }

    #[test]
    fn test_tie_keeps_first_found_pair() {
        // Both groups tie at 4 days; the earlier group wins
        let groups = vec![
            group(
                20,
                vec![
                    member(1, day(2023, 1, 1), day(2023, 1, 5)),
                    member(2, day(2023, 1, 1), day(2023, 1, 5)),
                ],
            ),
            group(
                30,
                vec![
                    member(3, day(2023, 2, 1), day(2023, 2, 5)),
                    member(4, day(2023, 2, 1), day(2023, 2, 5)),
                ],
            ),
        ];

        let found = find_largest_overlap(&groups).unwrap();
        assert_eq!(found.project_id, 20);
        assert_eq!(found.first_employee_id, 1);
        assert_eq!(found.second_employee_id, 2);
        assert_eq!(found.days_together, 4);
    }

    #[test]
    fn test_pair_order_follows_member_order() {
        // Three members all overlapping equally; the first pair (i=0, j=1) wins
        let groups = vec![group(
            40,
            vec![
                member(7, day(2023, 1, 1), day(2023, 1, 10)),
                member(8, day(2023, 1, 1), day(2023, 1, 10)),
                member(9, day(2023, 1, 1), day(2023, 1, 10)),
            ],
        )];

        let found = find_largest_overlap(&groups).unwrap();
        assert_eq!((found.first_employee_id, found.second_employee_id), (7, 8));
    }
}
