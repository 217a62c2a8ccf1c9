use crate::models::PeriodKey;
use crate::types::{DisplayName, OccurrenceCount, UserId};

/// Outcome of a query against the aggregation index.
///
/// `NotFound` is a normal result meaning nothing was ever recorded for the requested key;
/// it is distinct from a zero count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult<T> {
    NotFound,
    Found(T),
}

impl<T> QueryResult<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, QueryResult::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            QueryResult::Found(value) => Some(value),
            QueryResult::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for QueryResult<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => QueryResult::Found(value),
            None => QueryResult::NotFound,
        }
    }
}

/// One row of a per-user breakdown, already in leaderboard order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownEntry {
    /// 1-based position.
    pub rank: usize,
    pub user_id: UserId,
    pub display_name: DisplayName,
    pub count: OccurrenceCount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountSummary {
    pub period: PeriodKey,
    pub total: OccurrenceCount,
    pub breakdown: Vec<BreakdownEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    pub period: PeriodKey,
    pub breakdown: Vec<BreakdownEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCount {
    pub period: PeriodKey,
    pub count: OccurrenceCount,
}
