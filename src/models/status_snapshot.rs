use crate::types::TrackedSymbol;
use serde::Serialize;

/// Point-in-time operational status of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub tracked_symbols: Vec<TrackedSymbol>,
    pub total_groups: usize,
}
