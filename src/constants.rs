/// Badges for the first three leaderboard positions.
pub const RANK_BADGES: [&str; 3] = ["🥇", "🥈", "🥉"];

/// Column headers of the gzip-compressed index snapshot.
pub const SNAPSHOT_CSV_HEADERS: [&str; 5] = ["Group Id", "Symbol", "Period", "User Id", "Count"];

/// Column headers expected in an inbound message CSV stream.
pub const INBOUND_CSV_HEADERS: [&str; 6] = [
    "Group Id",
    "User Id",
    "Display Name",
    "Is Group",
    "Timestamp",
    "Text",
];
