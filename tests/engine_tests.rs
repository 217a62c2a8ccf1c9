use emoji_tally::{
    count_symbols_in_text, EmojiTally, Error, InboundMessage, QueryResult,
    DEFAULT_EMOJI_TALLY_CONFIG,
};
use test_utils::timestamp_for;

fn tally_at(timestamp: i64) -> EmojiTally {
    EmojiTally::new_with_timestamp_fn(DEFAULT_EMOJI_TALLY_CONFIG, Box::new(move || timestamp))
}

fn group_message(
    group_id: &str,
    user_id: &str,
    name: &str,
    text: &str,
    timestamp: i64,
) -> InboundMessage {
    InboundMessage::new(group_id, user_id, Some(name), text, timestamp)
}

#[cfg(test)]
mod occurrence_tests {
    use super::*;

    #[test]
    fn test_substring_counting() {
        let occurrences = count_symbols_in_text("😀😀x😀", &["😀"]);
        assert_eq!(occurrences.get("😀"), Some(&3));

        let occurrences = count_symbols_in_text("aaaa", &["aa"]);
        assert_eq!(occurrences.get("aa"), Some(&2));
    }

    #[test]
    fn test_absent_symbol_has_no_entry() {
        let occurrences = count_symbols_in_text("nothing to see", &["😀", "🎉"]);
        assert!(occurrences.is_empty());
    }
}

#[cfg(test)]
mod aggregation_tests {
    use super::*;

    #[test]
    fn test_counts_are_monotonic() {
        let march = timestamp_for(3, 2025);
        let mut tally = tally_at(march);
        tally.add_tracked("🎉").unwrap();

        let mut previous = 0;
        for text in ["🎉", "no party", "🎉🎉🎉", "🎉"] {
            tally.ingest(&group_message("G1", "U1", "Ana", text, march));

            let current = tally
                .query_user_count("G1", "🎉", "U1", None, None)
                .into_option()
                .map_or(0, |user_count| user_count.count);

            assert!(current >= previous);
            previous = current;
        }

        assert_eq!(previous, 5);
    }

    #[test]
    fn test_empty_tracking_set_records_nothing() {
        let march = timestamp_for(3, 2025);
        let mut tally = tally_at(march);

        let occurrences = tally.ingest(&group_message("G1", "U1", "Ana", "😀🎉👍", march));

        assert!(occurrences.is_empty());
        assert!(tally.index().is_empty());
        assert_eq!(tally.snapshot_status().total_groups, 0);
    }

    #[test]
    fn test_not_found_until_recorded() {
        let march = timestamp_for(3, 2025);
        let mut tally = tally_at(march);
        tally.add_tracked("🎉").unwrap();

        assert_eq!(
            tally.query_count("G1", "🎉", Some(3), Some(2025)),
            QueryResult::NotFound
        );

        tally.ingest(&group_message("G1", "U1", "Ana", "🎉", march));

        assert!(tally.query_count("G1", "🎉", Some(3), Some(2025)).is_found());
    }

    #[test]
    fn test_ranking_order() {
        let march = timestamp_for(3, 2025);
        let mut tally = tally_at(march);
        tally.add_tracked("😀").unwrap();

        for (user_id, count) in [("A", 5), ("B", 9), ("C", 2)] {
            let text = "😀".repeat(count);
            tally.ingest(&group_message("G1", user_id, user_id, &text, march));
        }

        let ranking = tally
            .query_ranking("G1", "😀", None, None)
            .into_option()
            .unwrap();

        let order: Vec<(usize, &str, usize)> = ranking
            .breakdown
            .iter()
            .map(|entry| (entry.rank, entry.user_id.as_str(), entry.count))
            .collect();

        assert_eq!(order, vec![(1, "B", 9), (2, "A", 5), (3, "C", 2)]);
    }

    #[test]
    fn test_default_period_is_query_time() {
        let february = timestamp_for(2, 2025);
        let march = timestamp_for(3, 2025);
        let mut tally = tally_at(march);
        tally.add_tracked("🎉").unwrap();

        tally.ingest(&group_message("G1", "U1", "Ana", "🎉", february));

        assert_eq!(tally.query_count("G1", "🎉", None, None), QueryResult::NotFound);
        assert!(tally.query_count("G1", "🎉", Some(2), None).is_found());
        assert!(tally.query_count("G1", "🎉", Some(2), Some(2025)).is_found());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let march = timestamp_for(3, 2025);
        let mut tally = tally_at(march);
        tally.add_tracked("🎉").unwrap();

        tally.ingest(&group_message("G1", "U1", "U1-name", "🎉🎉", march));

        let summary = tally
            .query_count("G1", "🎉", Some(3), Some(2025))
            .into_option()
            .unwrap();

        assert_eq!(summary.total, 2);
        let per_user: Vec<(&str, usize)> = summary
            .breakdown
            .iter()
            .map(|entry| (entry.display_name.as_str(), entry.count))
            .collect();
        assert_eq!(per_user, vec![("U1-name", 2)]);

        assert_eq!(
            tally.query_user_count("G1", "🎉", "U2", Some(3), Some(2025)),
            QueryResult::NotFound
        );
    }

    #[test]
    fn test_removal_is_not_retroactive() {
        let march = timestamp_for(3, 2025);
        let mut tally = tally_at(march);
        tally.add_tracked("🎉").unwrap();
        tally.ingest(&group_message("G1", "U1", "U1-name", "🎉🎉", march));

        assert!(tally.remove_tracked("🎉").unwrap());
        let occurrences = tally.ingest(&group_message("G1", "U1", "U1-name", "🎉", march));

        assert!(occurrences.is_empty());
        let summary = tally
            .query_count("G1", "🎉", Some(3), Some(2025))
            .into_option()
            .unwrap();
        assert_eq!(summary.total, 2);
    }

    #[test]
    fn test_groups_and_periods_are_isolated() {
        let march = timestamp_for(3, 2025);
        let april = timestamp_for(4, 2025);
        let mut tally = tally_at(april);
        tally.add_tracked("👍").unwrap();

        tally.ingest(&group_message("G1", "U1", "Ana", "👍", march));
        tally.ingest(&group_message("G1", "U1", "Ana", "👍👍", april));
        tally.ingest(&group_message("G2", "U1", "Ana", "👍👍👍", april));

        let total = |group_id: &str, month: u32| {
            tally
                .query_count(group_id, "👍", Some(month), Some(2025))
                .into_option()
                .map(|summary| summary.total)
        };

        assert_eq!(total("G1", 3), Some(1));
        assert_eq!(total("G1", 4), Some(2));
        assert_eq!(total("G2", 4), Some(3));
        assert_eq!(total("G2", 3), None);
    }
}

#[cfg(test)]
mod directory_tests {
    use super::*;

    #[test]
    fn test_missing_name_still_counts_with_placeholder() {
        let march = timestamp_for(3, 2025);
        let mut tally = tally_at(march);
        tally.add_tracked("🎉").unwrap();

        tally.ingest(&InboundMessage::new("G1", "U1", None, "🎉", march));

        let summary = tally
            .query_count("G1", "🎉", None, None)
            .into_option()
            .unwrap();
        assert_eq!(summary.breakdown[0].display_name, "Usuário");
        assert_eq!(summary.total, 1);
    }

    #[test]
    fn test_latest_name_is_rendered() {
        let march = timestamp_for(3, 2025);
        let mut tally = tally_at(march);
        tally.add_tracked("🎉").unwrap();

        tally.ingest(&group_message("G1", "U1", "Ana", "🎉", march));
        tally.ingest(&group_message("G1", "U1", "Ana Paula", "sem festa", march));

        let ranking = tally
            .query_ranking("G1", "🎉", None, None)
            .into_option()
            .unwrap();
        assert_eq!(ranking.breakdown[0].display_name, "Ana Paula");
    }

    #[test]
    fn test_blank_symbol_is_invalid() {
        let mut tally = tally_at(timestamp_for(3, 2025));

        assert!(matches!(
            tally.add_tracked(" "),
            Err(Error::InvalidArgument(_))
        ));
    }
}
