use crate::models::{
    AggregationIndex, BreakdownEntry, CountSummary, DisplayNameDirectory, PeriodKey, QueryResult,
    Ranking, UserCount,
};
use crate::utils::sort_breakdown;

/// Read-only queries over the aggregation index, rendered through the display-name
/// directory.
pub struct QueryEngine<'a> {
    index: &'a AggregationIndex,
    directory: &'a DisplayNameDirectory,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a AggregationIndex, directory: &'a DisplayNameDirectory) -> Self {
        QueryEngine { index, directory }
    }

    /// Total plus per-user breakdown.
    pub fn count(
        &self,
        group_id: &str,
        symbol: &str,
        period: PeriodKey,
    ) -> QueryResult<CountSummary> {
        self.breakdown(group_id, symbol, period)
            .map(|breakdown| CountSummary {
                period,
                total: breakdown.iter().map(|entry| entry.count).sum(),
                breakdown,
            })
            .into()
    }

    pub fn ranking(&self, group_id: &str, symbol: &str, period: PeriodKey) -> QueryResult<Ranking> {
        self.breakdown(group_id, symbol, period)
            .map(|breakdown| Ranking { period, breakdown })
            .into()
    }

    /// Looks up a single user's count. Not found whenever that user has no entry, even if
    /// other users do.
    pub fn user_count(
        &self,
        group_id: &str,
        symbol: &str,
        period: PeriodKey,
        user_id: &str,
    ) -> QueryResult<UserCount> {
        self.index
            .user_count(group_id, symbol, period, user_id)
            .map(|count| UserCount { period, count })
            .into()
    }

    fn breakdown(
        &self,
        group_id: &str,
        symbol: &str,
        period: PeriodKey,
    ) -> Option<Vec<BreakdownEntry>> {
        let users = self.index.get(group_id, symbol, period)?;

        let breakdown = sort_breakdown(users)
            .into_iter()
            .enumerate()
            .map(|(index, (user_id, count))| BreakdownEntry {
                rank: index + 1,
                display_name: self.directory.lookup(&user_id).to_string(),
                user_id,
                count,
            })
            .collect();

        Some(breakdown)
    }
}
