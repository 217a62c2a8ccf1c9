use std::collections::HashMap;

use crate::models::PeriodKey;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a tracked emoji as an owned `String`.
///
/// No validation is applied; a tracked symbol may be a multi-codepoint grapheme cluster
/// or even plain ASCII text.
pub type TrackedSymbol = String;

/// Opaque, stable identifier of a group conversation, as supplied by the transport.
pub type GroupId = String;

/// Opaque, stable identifier of a message author, as supplied by the transport.
pub type UserId = String;

/// The last-seen display name of a user.
pub type DisplayName = String;

/// Represents the number of occurrences of a tracked symbol.
pub type OccurrenceCount = usize;

/// Represents a sparse map of tracked symbols to their occurrence counts within a single message.
/// Symbols which did not occur are never present.
pub type OccurrenceMap = HashMap<TrackedSymbol, OccurrenceCount>;

/// Per-user counts for a single group, symbol and period (the "breakdown").
pub type UserCountMap = HashMap<UserId, OccurrenceCount>;

/// Period level of the aggregation index.
pub type PeriodCountMap = HashMap<PeriodKey, UserCountMap>;

/// Symbol level of the aggregation index.
pub type SymbolCountMap = HashMap<TrackedSymbol, PeriodCountMap>;

/// Calendar month, 1 through 12.
pub type Month = u32;

/// Calendar year.
pub type Year = i32;

/// Seconds since the Unix epoch.
pub type UnixTimestamp = i64;
