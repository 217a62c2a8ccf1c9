use crate::types::TrackedSymbol;

/// The mutable set of symbols currently being counted.
///
/// Insertion order is preserved so listings are stable.
#[derive(Debug, Clone, Default)]
pub struct TrackingSet {
    symbols: Vec<TrackedSymbol>,
}

impl TrackingSet {
    pub fn new() -> Self {
        TrackingSet {
            symbols: Vec::new(),
        }
    }

    /// Adds a symbol, returning `true` if it was not already tracked.
    pub fn add(&mut self, symbol: &str) -> bool {
        if self.contains(symbol) {
            return false;
        }

        self.symbols.push(symbol.to_string());
        true
    }

    /// Removes a symbol, returning `true` if it was tracked.
    pub fn remove(&mut self, symbol: &str) -> bool {
        let len_before = self.symbols.len();
        self.symbols.retain(|tracked| tracked != symbol);

        self.symbols.len() != len_before
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|tracked| tracked == symbol)
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn list(&self) -> Vec<TrackedSymbol> {
        self.symbols.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedSymbol> {
        self.symbols.iter()
    }
}
