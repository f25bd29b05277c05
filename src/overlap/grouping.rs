//! Partitioning of a day's schedules into overlap groups.
//!
//! # Algorithm
//!
//! 1. Stable-sort items by start minute.
//! 2. Walk the sorted list; each not-yet-visited item seeds a group.
//! 3. Discover the seed's connected component with an explicit stack:
//!    the top frame scans the sorted list for the next unvisited item
//!    overlapping it, pushes that item, and resumes scanning once the
//!    pushed frame is exhausted. This is depth-first preorder, identical
//!    to a recursive walk but with no call-stack growth.
//! 4. Compute the group's peak concurrency with the sweep.
//!
//! Groups come out in seed order; items within a group in discovery
//! order. Because every frame scans in start order, discovery order
//! matches start order for well-formed (`start < end`) input. Degenerate
//! ranges carry no such guarantee.
//!
//! # Complexity
//! O(n^2) overlap tests in the worst case. A day holds tens of items.

use log::trace;

use super::sweep::{calculate_max_concurrent, is_overlapping};
use crate::models::{OverlapGroup, ScheduleEntry};

/// Splits items into maximal groups of transitively overlapping items.
///
/// Every input item appears in exactly one group. Items with the same
/// id as the current item are never treated as its neighbours.
///
/// # Example
///
/// ```
/// use u_dayplan::models::ScheduleItem;
/// use u_dayplan::overlap::group_overlapping_schedules;
///
/// let items = vec![
///     ScheduleItem::new("a", 540, 600),
///     ScheduleItem::new("b", 570, 630),
///     ScheduleItem::new("c", 660, 720),
/// ];
/// let groups = group_overlapping_schedules(&items);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].max_concurrent, 2);
/// assert_eq!(groups[1].items[0].id, "c");
/// ```
pub fn group_overlapping_schedules<T>(items: &[T]) -> Vec<OverlapGroup<T>>
where
    T: ScheduleEntry + Clone,
{
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by_key(|&i| items[i].start_minutes());
    let sorted: Vec<&T> = order.iter().map(|&i| &items[i]).collect();

    let mut visited = vec![false; sorted.len()];
    let mut groups = Vec::new();

    for seed in 0..sorted.len() {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;

        let members = collect_component(&sorted, seed, &mut visited);
        let items: Vec<T> = members.iter().map(|&i| sorted[i].clone()).collect();
        let max_concurrent = calculate_max_concurrent(&items);

        trace!(
            "overlap group seeded by '{}': {} item(s), peak {}",
            sorted[seed].id(),
            items.len(),
            max_concurrent
        );

        groups.push(OverlapGroup {
            items,
            max_concurrent,
        });
    }

    groups
}

/// Depth-first discovery of the component containing `seed`.
///
/// Returns indices into `sorted` in preorder. Marks each discovered
/// index in `visited`.
fn collect_component<T: ScheduleEntry>(
    sorted: &[&T],
    seed: usize,
    visited: &mut [bool],
) -> Vec<usize> {
    let mut members = vec![seed];
    // (item index, next candidate index to scan)
    let mut stack: Vec<(usize, usize)> = vec![(seed, 0)];

    while let Some(frame) = stack.last_mut() {
        let (current, cursor) = *frame;
        let next = (cursor..sorted.len()).find(|&j| {
            !visited[j]
                && sorted[j].id() != sorted[current].id()
                && is_overlapping(sorted[current], sorted[j])
        });

        match next {
            Some(j) => {
                frame.1 = j + 1;
                visited[j] = true;
                members.push(j);
                stack.push((j, 0));
            }
            None => {
                stack.pop();
            }
        }
    }

    members
}
