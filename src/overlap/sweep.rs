//! Overlap predicate and concurrency sweep.
//!
//! # Algorithm
//! `calculate_max_concurrent` is a sweep line over start/end events.
//! Events at the same minute are ordered end-before-start, so a block
//! ending at 10:00 and another starting at 10:00 never count as
//! concurrent. This matches the half-open semantics of
//! [`is_overlapping`].
//!
//! # Complexity
//! O(n log n) for the sweep, O(n) for a single `find_overlaps` query.

use crate::models::{ScheduleEntry, TimeSpan};

/// Whether two spans share at least one minute.
///
/// Half-open: spans that only touch (`a.end == b.start`) do not overlap.
/// Symmetric in its arguments.
#[inline]
pub fn is_overlapping(a: &impl TimeSpan, b: &impl TimeSpan) -> bool {
    a.start_minutes() < b.end_minutes() && b.start_minutes() < a.end_minutes()
}

/// Returns every entry of `all` overlapping `target`, in `all`'s order.
///
/// Entries sharing `target`'s id are skipped.
pub fn find_overlaps<'a, T: ScheduleEntry>(target: &T, all: &'a [T]) -> Vec<&'a T> {
    all.iter()
        .filter(|other| other.id() != target.id() && is_overlapping(target, *other))
        .collect()
}

// End sorts before Start so that touching spans are not concurrent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    End,
    Start,
}

/// Peak number of spans active at the same minute.
///
/// Returns 0 for no spans and 1 for a single span.
pub fn calculate_max_concurrent<T: TimeSpan>(items: &[T]) -> usize {
    match items.len() {
        0 => return 0,
        1 => return 1,
        _ => {}
    }

    let mut events: Vec<(i32, EventKind)> = items
        .iter()
        .flat_map(|s| {
            [
                (s.start_minutes(), EventKind::Start),
                (s.end_minutes(), EventKind::End),
            ]
        })
        .collect();
    events.sort_unstable();

    let mut current: usize = 0;
    let mut peak: usize = 0;
    for (_, kind) in events {
        match kind {
            EventKind::Start => {
                current += 1;
                peak = peak.max(current);
            }
            EventKind::End => current = current.saturating_sub(1),
        }
    }

    peak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScheduleItem, TimeRange};

    fn item(id: &str, start: i32, end: i32) -> ScheduleItem {
        ScheduleItem::new(id, start, end)
    }

    #[test]
    fn test_identical_ranges_overlap() {
        let a = TimeRange::new(540, 600);
        assert!(is_overlapping(&a, &a));
    }

    #[test]
    fn test_partial_overlap() {
        let a = TimeRange::new(540, 600);
        let b = TimeRange::new(570, 630);
        assert!(is_overlapping(&a, &b));
        assert!(is_overlapping(&b, &a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = TimeRange::new(540, 660);
        let inner = TimeRange::new(570, 600);
        assert!(is_overlapping(&outer, &inner));
    }

    #[test]
    fn test_touching_does_not_overlap() {
        let a = TimeRange::new(0, 60);
        let b = TimeRange::new(60, 120);
        assert!(!is_overlapping(&a, &b));
        assert!(!is_overlapping(&b, &a));
    }

    #[test]
    fn test_disjoint_does_not_overlap() {
        let a = TimeRange::new(540, 600);
        let b = TimeRange::new(660, 720);
        assert!(!is_overlapping(&a, &b));
    }

    #[test]
    fn test_mixed_span_types() {
        let range = TimeRange::new(540, 600);
        let it = item("x", 599, 700);
        assert!(is_overlapping(&range, &it));
    }

    #[test]
    fn test_find_overlaps() {
        let all = vec![
            item("1", 540, 600),
            item("2", 570, 630),
            item("3", 660, 720),
        ];

        let found = find_overlaps(&all[0], &all);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "2");

        assert!(find_overlaps(&all[2], &all).is_empty());

        let found = find_overlaps(&all[1], &all);
        assert!(found.iter().all(|s| s.id != "2")); // self excluded
    }

    #[test]
    fn test_find_overlaps_preserves_order() {
        let all = vec![
            item("c", 600, 700),
            item("target", 550, 650),
            item("a", 500, 560),
            item("b", 640, 660),
        ];
        let ids: Vec<&str> = find_overlaps(&all[1], &all)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_max_concurrent_trivial() {
        assert_eq!(calculate_max_concurrent::<ScheduleItem>(&[]), 0);
        assert_eq!(calculate_max_concurrent(&[item("1", 540, 600)]), 1);
    }

    #[test]
    fn test_max_concurrent_touching() {
        let items = vec![item("1", 540, 600), item("2", 600, 660)];
        assert_eq!(calculate_max_concurrent(&items), 1);
    }

    #[test]
    fn test_max_concurrent_pair() {
        let items = vec![item("1", 540, 600), item("2", 570, 630)];
        assert_eq!(calculate_max_concurrent(&items), 2);
    }

    #[test]
    fn test_max_concurrent_three_way() {
        // 09:00-11:00, 09:30-10:30, 10:00-10:50 all active at 10:20
        let items = vec![
            item("1", 540, 660),
            item("2", 570, 630),
            item("3", 600, 650),
        ];
        assert_eq!(calculate_max_concurrent(&items), 3);
    }

    #[test]
    fn test_max_concurrent_chain() {
        // 1-2 overlap, 2-3 overlap, 1-3 do not
        let items = vec![
            item("1", 540, 600),
            item("2", 570, 630),
            item("3", 615, 675),
        ];
        assert_eq!(calculate_max_concurrent(&items), 2);
    }

    #[test]
    fn test_max_concurrent_ignores_input_order() {
        let items = vec![
            item("3", 600, 650),
            item("1", 540, 660),
            item("2", 570, 630),
        ];
        assert_eq!(calculate_max_concurrent(&items), 3);
    }
}
