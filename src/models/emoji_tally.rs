use crate::config::DEFAULT_EMOJI_TALLY_CONFIG;
use crate::models::{
    AggregationIndex, CountSummary, DisplayNameDirectory, EmojiTallyConfig, InboundMessage,
    OccurrenceCounter, PeriodKey, QueryEngine, QueryResult, Ranking, StatusSnapshot,
    TrackingSet, UserCount,
};
use crate::types::{Month, OccurrenceMap, TrackedSymbol, UnixTimestamp, Year};
use crate::utils::{read_index_snapshot, write_index_snapshot};
use crate::Error;

use chrono::Datelike;
use log::{debug, info, warn};
use std::io::{Read, Write};

pub type TimestampFn = Box<dyn Fn() -> UnixTimestamp + Send + Sync>;

/// The aggregation engine.
///
/// Owns the tracking set, the aggregation index and the display-name directory. All
/// mutation goes through `&mut self`; share across threads by wrapping in a `Mutex`.
pub struct EmojiTally {
    config: EmojiTallyConfig,
    tracking_set: TrackingSet,
    index: AggregationIndex,
    directory: DisplayNameDirectory,
    timestamp_fn: TimestampFn,
}

impl Default for EmojiTally {
    fn default() -> Self {
        Self::new()
    }
}

impl EmojiTally {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_EMOJI_TALLY_CONFIG)
    }

    /// Uses system time (`chrono::Utc::now()`) for default query periods.
    pub fn with_config(config: EmojiTallyConfig) -> Self {
        Self::new_with_timestamp_fn(config, Box::new(|| chrono::Utc::now().timestamp()))
    }

    /// Creates an engine with a custom clock, used to resolve the default query period.
    pub fn new_with_timestamp_fn(config: EmojiTallyConfig, timestamp_fn: TimestampFn) -> Self {
        EmojiTally {
            config,
            tracking_set: TrackingSet::new(),
            index: AggregationIndex::new(),
            directory: DisplayNameDirectory::new(config.unknown_user_label),
            timestamp_fn,
        }
    }

    pub fn config(&self) -> &EmojiTallyConfig {
        &self.config
    }

    pub fn index(&self) -> &AggregationIndex {
        &self.index
    }

    pub fn directory(&self) -> &DisplayNameDirectory {
        &self.directory
    }

    pub fn now(&self) -> UnixTimestamp {
        (self.timestamp_fn)()
    }

    /// Starts counting `symbol`. Returns whether it was newly tracked.
    pub fn add_tracked(&mut self, symbol: &str) -> Result<bool, Error> {
        let symbol = require_symbol(symbol)?;
        let added = self.tracking_set.add(symbol);

        if added {
            info!("Tracking {}", symbol);
        }

        Ok(added)
    }

    /// Stops counting `symbol`. Already recorded counts are kept.
    pub fn remove_tracked(&mut self, symbol: &str) -> Result<bool, Error> {
        let symbol = require_symbol(symbol)?;
        let removed = self.tracking_set.remove(symbol);

        if removed {
            info!("No longer tracking {}", symbol);
        }

        Ok(removed)
    }

    pub fn list_tracked(&self) -> Vec<TrackedSymbol> {
        self.tracking_set.list()
    }

    /// Records the author's display name without counting anything.
    pub fn observe_author(&mut self, message: &InboundMessage) {
        if !message.is_group_chat {
            return;
        }

        self.directory
            .observe(&message.user_id, message.display_name.as_deref());
    }

    /// Counts tracked symbols in a group message and adds them to the index.
    ///
    /// Messages outside group chats are ignored entirely. Returns the occurrences that
    /// were recorded, which is empty when nothing tracked was found.
    pub fn ingest(&mut self, message: &InboundMessage) -> OccurrenceMap {
        if !message.is_group_chat {
            return OccurrenceMap::new();
        }

        self.observe_author(message);

        let occurrences = OccurrenceCounter::count(&message.text, &self.tracking_set);

        if occurrences.is_empty() {
            return occurrences;
        }

        let period = match PeriodKey::from_timestamp(message.timestamp) {
            Ok(period) => period,
            Err(err) => {
                warn!("Skipping message from {}: {}", message.user_id, err);
                return OccurrenceMap::new();
            }
        };

        self.index
            .record(&message.group_id, period, &message.user_id, &occurrences);

        for (symbol, count) in &occurrences {
            debug!(
                "{}: +{} {} ({} in {})",
                self.directory.lookup(&message.user_id),
                count,
                symbol,
                period,
                message.group_id
            );
        }

        occurrences
    }

    /// Resolves an optional month and year, each defaulting to the current one at query
    /// time.
    pub fn resolve_period(
        &self,
        month: Option<Month>,
        year: Option<Year>,
    ) -> Result<PeriodKey, Error> {
        let (current_month, current_year) = match (month, year) {
            (Some(month), Some(year)) => (month, year),
            _ => {
                let timestamp = self.now();
                let now = chrono::DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
                    Error::Other(format!("Clock returned an invalid timestamp: {}", timestamp))
                })?;

                (now.month(), now.year())
            }
        };

        PeriodKey::new(month.unwrap_or(current_month), year.unwrap_or(current_year))
    }

    pub fn query_count(
        &self,
        group_id: &str,
        symbol: &str,
        month: Option<Month>,
        year: Option<Year>,
    ) -> QueryResult<CountSummary> {
        match self.query_period(month, year) {
            Some(period) => self.query_engine().count(group_id, symbol, period),
            None => QueryResult::NotFound,
        }
    }

    pub fn query_ranking(
        &self,
        group_id: &str,
        symbol: &str,
        month: Option<Month>,
        year: Option<Year>,
    ) -> QueryResult<Ranking> {
        match self.query_period(month, year) {
            Some(period) => self.query_engine().ranking(group_id, symbol, period),
            None => QueryResult::NotFound,
        }
    }

    pub fn query_user_count(
        &self,
        group_id: &str,
        symbol: &str,
        user_id: &str,
        month: Option<Month>,
        year: Option<Year>,
    ) -> QueryResult<UserCount> {
        match self.query_period(month, year) {
            Some(period) => self
                .query_engine()
                .user_count(group_id, symbol, period, user_id),
            None => QueryResult::NotFound,
        }
    }

    pub fn snapshot_status(&self) -> StatusSnapshot {
        StatusSnapshot {
            tracked_symbols: self.tracking_set.list(),
            total_groups: self.index.group_count(),
        }
    }

    /// Persists the aggregation index as a gzip-compressed CSV snapshot.
    pub fn write_snapshot<W: Write>(&self, writer: W) -> Result<(), Error> {
        write_index_snapshot(&self.index, writer)
    }

    /// Replaces the aggregation index with one loaded from a snapshot.
    ///
    /// The current index is left untouched if the snapshot cannot be read.
    pub fn restore_snapshot<R: Read>(&mut self, reader: R) -> Result<(), Error> {
        let index = read_index_snapshot(reader)?;

        info!("Restored {} groups from snapshot", index.group_count());
        self.index = index;

        Ok(())
    }

    fn query_engine(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.index, &self.directory)
    }

    fn query_period(&self, month: Option<Month>, year: Option<Year>) -> Option<PeriodKey> {
        match self.resolve_period(month, year) {
            Ok(period) => Some(period),
            Err(err) => {
                debug!("Unresolvable query period: {}", err);
                None
            }
        }
    }
}

fn require_symbol(symbol: &str) -> Result<&str, Error> {
    let symbol = symbol.trim();

    if symbol.is_empty() {
        return Err(Error::InvalidArgument("No symbol given".to_string()));
    }

    Ok(symbol)
}
