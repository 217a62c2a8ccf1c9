use emoji_tally::{EmojiTally, Error, InboundMessage, DEFAULT_EMOJI_TALLY_CONFIG};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use test_utils::timestamp_for;

fn tally_at(timestamp: i64) -> EmojiTally {
    EmojiTally::new_with_timestamp_fn(DEFAULT_EMOJI_TALLY_CONFIG, Box::new(move || timestamp))
}

fn gzip(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restored_engine_answers_same_queries() {
        let march = timestamp_for(3, 2025);
        let mut tally = tally_at(march);
        tally.add_tracked("🎉").unwrap();
        tally.ingest(&InboundMessage::new("G1", "U1", Some("Ana"), "🎉🎉", march));
        tally.ingest(&InboundMessage::new("G1", "U2", Some("Bruno"), "🎉", march));
        tally.ingest(&InboundMessage::new("G2", "U1", Some("Ana"), "🎉", march));

        let mut snapshot = Vec::new();
        tally.write_snapshot(&mut snapshot).unwrap();

        let mut restored = tally_at(march);
        restored.restore_snapshot(snapshot.as_slice()).unwrap();

        assert_eq!(restored.index().entries(), tally.index().entries());
        assert_eq!(restored.snapshot_status().total_groups, 2);

        let summary = restored
            .query_count("G1", "🎉", None, None)
            .into_option()
            .unwrap();
        assert_eq!(summary.total, 3);
        // Display names are not part of the snapshot
        assert_eq!(summary.breakdown[0].display_name, "Usuário");
    }

    #[test]
    fn test_restore_reads_columns_by_name() {
        let snapshot = gzip("Count,User Id,Period,Symbol,Group Id\n4,U1,12-2024,👍,G1\n");

        let mut tally = tally_at(timestamp_for(3, 2025));
        tally.restore_snapshot(snapshot.as_slice()).unwrap();

        let user_count = tally
            .query_user_count("G1", "👍", "U1", Some(12), Some(2024))
            .into_option()
            .unwrap();
        assert_eq!(user_count.count, 4);
    }

    #[test]
    fn test_failed_restore_keeps_current_index() {
        let march = timestamp_for(3, 2025);
        let mut tally = tally_at(march);
        tally.add_tracked("🎉").unwrap();
        tally.ingest(&InboundMessage::new("G1", "U1", Some("Ana"), "🎉", march));

        let bad_period = gzip("Group Id,Symbol,Period,User Id,Count\nG1,🎉,13-2025,U1,1\n");
        let zero_count = gzip("Group Id,Symbol,Period,User Id,Count\nG1,🎉,3-2025,U1,0\n");
        let missing_column = gzip("Group Id,Symbol,Period,Count\nG1,🎉,3-2025,1\n");

        for snapshot in [bad_period, zero_count, missing_column] {
            assert!(matches!(
                tally.restore_snapshot(snapshot.as_slice()),
                Err(Error::ParserError(_)) | Err(Error::InvalidArgument(_))
            ));
        }

        assert_eq!(tally.index().group_count(), 1);
    }

    #[test]
    fn test_empty_index_snapshot() {
        let tally = tally_at(timestamp_for(3, 2025));

        let mut snapshot = Vec::new();
        tally.write_snapshot(&mut snapshot).unwrap();

        let mut restored = tally_at(timestamp_for(3, 2025));
        restored.restore_snapshot(snapshot.as_slice()).unwrap();

        assert!(restored.index().is_empty());
    }
}
