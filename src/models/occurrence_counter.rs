use crate::types::OccurrenceMap;
use crate::utils::count_substring_occurrences;
use crate::TrackingSet;

pub struct OccurrenceCounter;

impl OccurrenceCounter {
    /// Counts every tracked symbol within `text`.
    ///
    /// The result is sparse: symbols which do not occur are omitted rather than mapped to
    /// zero. When nothing is tracked the text is not scanned at all.
    pub fn count(text: &str, tracking_set: &TrackingSet) -> OccurrenceMap {
        let mut occurrences = OccurrenceMap::new();

        if tracking_set.is_empty() {
            return occurrences;
        }

        for symbol in tracking_set.iter() {
            let count = count_substring_occurrences(text, symbol);

            if count > 0 {
                occurrences.insert(symbol.clone(), count);
            }
        }

        occurrences
    }
}
