pub mod aggregation_index;
pub use aggregation_index::{AggregationIndex, IndexEntry};

pub mod command;
pub use command::{Command, QueryArgs};

pub mod command_dispatcher;
pub use command_dispatcher::{replay_messages, CommandDispatcher};

pub mod config;
pub use config::EmojiTallyConfig;

pub mod display_name_directory;
pub use display_name_directory::DisplayNameDirectory;

pub mod emoji_tally;
pub use emoji_tally::{EmojiTally, TimestampFn};

pub mod error;
pub use error::Error;

pub mod inbound_message;
pub use inbound_message::InboundMessage;

pub mod occurrence_counter;
pub use occurrence_counter::OccurrenceCounter;

pub mod period_key;
pub use period_key::PeriodKey;

pub mod query_engine;
pub use query_engine::QueryEngine;

pub mod query_result;
pub use query_result::{BreakdownEntry, CountSummary, QueryResult, Ranking, UserCount};

pub mod status_snapshot;
pub use status_snapshot::StatusSnapshot;

pub mod tracking_set;
pub use tracking_set::TrackingSet;
