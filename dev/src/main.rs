use emoji_tally::{rank_label, EmojiTally, Error, QueryResult};
use log::{error, info};
use std::fs::File;
use std::io::BufReader;

/// Prints every leaderboard stored in an index snapshot.
fn main() {
    env_logger::init();

    let Some(snapshot_path) = std::env::args().nth(1) else {
        error!("Usage: dev <snapshot.csv.gz>");
        std::process::exit(1);
    };

    let mut tally = EmojiTally::new();

    let restored = File::open(&snapshot_path)
        .map_err(Error::from)
        .and_then(|file| tally.restore_snapshot(BufReader::new(file)));

    if let Err(e) = restored {
        error!("Failed to load {}: {}", snapshot_path, e);
        std::process::exit(1);
    }

    let keys = tally.index().keys();
    info!("{} leaderboards in {}", keys.len(), snapshot_path);

    for (group_id, symbol, period) in keys {
        let ranking = tally.query_ranking(
            &group_id,
            &symbol,
            Some(period.month()),
            Some(period.year()),
        );

        if let QueryResult::Found(ranking) = ranking {
            println!("{} {} {}", group_id, symbol, period);

            for entry in ranking.breakdown {
                println!(
                    "  {} {}: {}",
                    rank_label(entry.rank),
                    entry.user_id,
                    entry.count
                );
            }
        }
    }

    println!("{} groups", tally.snapshot_status().total_groups);
}
