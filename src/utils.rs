pub mod count_substring_occurrences;
pub use count_substring_occurrences::count_substring_occurrences;

pub mod rank_label;
pub use rank_label::rank_label;

pub mod read_inbound_messages;
pub use read_inbound_messages::read_inbound_messages;

pub mod read_index_snapshot;
pub use read_index_snapshot::read_index_snapshot;

pub mod sort_breakdown;
pub use sort_breakdown::sort_breakdown;

pub mod write_index_snapshot;
pub use write_index_snapshot::write_index_snapshot;
