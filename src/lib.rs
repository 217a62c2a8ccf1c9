#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_EMOJI_TALLY_CONFIG;
mod constants;
pub use constants::{INBOUND_CSV_HEADERS, RANK_BADGES, SNAPSHOT_CSV_HEADERS};
pub mod models;
pub use models::{
    AggregationIndex, BreakdownEntry, Command, CommandDispatcher, CountSummary,
    DisplayNameDirectory, EmojiTally, EmojiTallyConfig, Error, InboundMessage, OccurrenceCounter,
    PeriodKey, QueryResult, Ranking, StatusSnapshot, TrackingSet, UserCount,
};
pub mod types;
mod utils;
pub use types::{
    DisplayName, GroupId, Month, OccurrenceCount, OccurrenceMap, TrackedSymbol, UnixTimestamp,
    UserCountMap, UserId, Year,
};
pub use utils::{
    count_substring_occurrences, rank_label, read_inbound_messages, read_index_snapshot,
    sort_breakdown, write_index_snapshot,
};

/// Counts the given symbols within a single text, without touching any engine state.
///
/// Symbols are counted independently as non-overlapping literal substrings; symbols which do
/// not occur are omitted from the result.
pub fn count_symbols_in_text(text: &str, symbols: &[&str]) -> OccurrenceMap {
    let mut tracking_set = TrackingSet::new();

    for symbol in symbols {
        tracking_set.add(symbol);
    }

    OccurrenceCounter::count(text, &tracking_set)
}
