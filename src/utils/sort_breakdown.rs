use crate::types::{OccurrenceCount, UserCountMap, UserId};

/// Sorts a per-user breakdown into leaderboard order.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by count in descending order (higher count first).
/// - **Secondary:** If two users have the same count, sorts by user id in ascending
///   lexicographical order for deterministic ordering.
///
/// ### Example:
/// ```ignore
/// let mut breakdown = UserCountMap::new();
/// breakdown.insert("A".to_string(), 5);
/// breakdown.insert("B".to_string(), 9);
/// breakdown.insert("C".to_string(), 5);
///
/// assert_eq!(sort_breakdown(&breakdown), vec![
///     ("B".to_string(), 9),
///     ("A".to_string(), 5),
///     ("C".to_string(), 5),
/// ]);
/// ```
pub fn sort_breakdown(breakdown: &UserCountMap) -> Vec<(UserId, OccurrenceCount)> {
    let mut sorted_breakdown: Vec<(UserId, OccurrenceCount)> = breakdown
        .iter()
        .map(|(user_id, count)| (user_id.to_owned(), *count))
        .collect();

    sorted_breakdown.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by count (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by user id (ascending)
    });

    sorted_breakdown
}
