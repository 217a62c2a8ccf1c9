use crate::models::PeriodKey;
use crate::types::{
    GroupId, OccurrenceCount, OccurrenceMap, SymbolCountMap, TrackedSymbol, UserCountMap, UserId,
};
use std::collections::HashMap;

/// A single leaf of the aggregation index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IndexEntry {
    pub group_id: GroupId,
    pub symbol: TrackedSymbol,
    pub period: PeriodKey,
    pub user_id: UserId,
    pub count: OccurrenceCount,
}

/// Hierarchical counter store: group → symbol → period → user → count.
///
/// Counts are monotonic. A leaf exists only once at least one occurrence has been
/// recorded for it, and there is no operation which removes or decrements a leaf.
#[derive(Debug, Clone, Default)]
pub struct AggregationIndex {
    groups: HashMap<GroupId, SymbolCountMap>,
}

impl AggregationIndex {
    pub fn new() -> Self {
        AggregationIndex {
            groups: HashMap::new(),
        }
    }

    /// Adds the given occurrences to the leaves for `group_id`, `period` and `user_id`.
    ///
    /// Zero counts are skipped so that no path is ever created without an increment.
    pub fn record(
        &mut self,
        group_id: &str,
        period: PeriodKey,
        user_id: &str,
        occurrences: &OccurrenceMap,
    ) {
        for (symbol, &count) in occurrences {
            if count == 0 {
                continue;
            }

            self.increment(group_id, symbol, period, user_id, count);
        }
    }

    /// Gets the per-user counts for a group, symbol and period, or `None` if nothing was
    /// ever recorded for that combination.
    pub fn get(&self, group_id: &str, symbol: &str, period: PeriodKey) -> Option<&UserCountMap> {
        self.groups
            .get(group_id)
            .and_then(|symbols| symbols.get(symbol))
            .and_then(|periods| periods.get(&period))
    }

    pub fn user_count(
        &self,
        group_id: &str,
        symbol: &str,
        period: PeriodKey,
        user_id: &str,
    ) -> Option<OccurrenceCount> {
        self.get(group_id, symbol, period)
            .and_then(|users| users.get(user_id))
            .copied()
    }

    /// Gets the total number of groups with at least one recorded occurrence.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Collects every `(group, symbol, period)` combination with recorded data, sorted.
    pub fn keys(&self) -> Vec<(GroupId, TrackedSymbol, PeriodKey)> {
        let mut keys: Vec<(GroupId, TrackedSymbol, PeriodKey)> = self
            .groups
            .iter()
            .flat_map(|(group_id, symbols)| {
                symbols.iter().flat_map(move |(symbol, periods)| {
                    periods
                        .keys()
                        .map(move |period| (group_id.clone(), symbol.clone(), *period))
                })
            })
            .collect();

        keys.sort();
        keys
    }

    /// Collects every leaf of the index, sorted by group, symbol, period and user.
    pub fn entries(&self) -> Vec<IndexEntry> {
        let mut entries = Vec::new();

        for (group_id, symbols) in &self.groups {
            for (symbol, periods) in symbols {
                for (period, users) in periods {
                    for (user_id, &count) in users {
                        entries.push(IndexEntry {
                            group_id: group_id.clone(),
                            symbol: symbol.clone(),
                            period: *period,
                            user_id: user_id.clone(),
                            count,
                        });
                    }
                }
            }
        }

        entries.sort();
        entries
    }

    fn increment(
        &mut self,
        group_id: &str,
        symbol: &str,
        period: PeriodKey,
        user_id: &str,
        count: OccurrenceCount,
    ) {
        *self
            .groups
            .entry(group_id.to_string())
            .or_default()
            .entry(symbol.to_string())
            .or_default()
            .entry(period)
            .or_default()
            .entry(user_id.to_string())
            .or_insert(0) += count;
    }
}

impl FromIterator<IndexEntry> for AggregationIndex {
    fn from_iter<I: IntoIterator<Item = IndexEntry>>(entries: I) -> Self {
        let mut index = AggregationIndex::new();

        for entry in entries {
            if entry.count > 0 {
                index.increment(
                    &entry.group_id,
                    &entry.symbol,
                    entry.period,
                    &entry.user_id,
                    entry.count,
                );
            }
        }

        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurrences(pairs: &[(&str, OccurrenceCount)]) -> OccurrenceMap {
        pairs
            .iter()
            .map(|(symbol, count)| (symbol.to_string(), *count))
            .collect()
    }

    fn march_2025() -> PeriodKey {
        PeriodKey::new(3, 2025).unwrap()
    }

    #[test]
    fn test_record_accumulates() {
        let mut index = AggregationIndex::new();

        index.record("G1", march_2025(), "U1", &occurrences(&[("😀", 2)]));
        index.record("G1", march_2025(), "U1", &occurrences(&[("😀", 3)]));

        assert_eq!(index.user_count("G1", "😀", march_2025(), "U1"), Some(5));
    }

    #[test]
    fn test_zero_counts_create_no_path() {
        let mut index = AggregationIndex::new();

        index.record("G1", march_2025(), "U1", &occurrences(&[("😀", 0)]));

        assert!(index.is_empty());
        assert!(index.get("G1", "😀", march_2025()).is_none());
    }

    #[test]
    fn test_get_distinguishes_absent_combinations() {
        let mut index = AggregationIndex::new();
        index.record("G1", march_2025(), "U1", &occurrences(&[("😀", 1)]));

        assert!(index.get("G1", "😀", march_2025()).is_some());
        assert!(index.get("G2", "😀", march_2025()).is_none());
        assert!(index.get("G1", "🎉", march_2025()).is_none());
        assert!(index
            .get("G1", "😀", PeriodKey::new(2, 2025).unwrap())
            .is_none());
    }

    #[test]
    fn test_groups_are_isolated() {
        let mut index = AggregationIndex::new();
        index.record("G1", march_2025(), "U1", &occurrences(&[("😀", 1)]));
        index.record("G2", march_2025(), "U1", &occurrences(&[("😀", 4)]));

        assert_eq!(index.group_count(), 2);
        assert_eq!(index.user_count("G1", "😀", march_2025(), "U1"), Some(1));
        assert_eq!(index.user_count("G2", "😀", march_2025(), "U1"), Some(4));
    }

    #[test]
    fn test_entries_round_trip_through_from_iter() {
        let mut index = AggregationIndex::new();
        index.record("G1", march_2025(), "U2", &occurrences(&[("😀", 1), ("🎉", 2)]));
        index.record("G1", march_2025(), "U1", &occurrences(&[("😀", 7)]));

        let rebuilt: AggregationIndex = index.entries().into_iter().collect();

        assert_eq!(rebuilt.entries(), index.entries());
        assert_eq!(
            index.keys(),
            vec![
                ("G1".to_string(), "🎉".to_string(), march_2025()),
                ("G1".to_string(), "😀".to_string(), march_2025()),
            ]
        );
    }
}
