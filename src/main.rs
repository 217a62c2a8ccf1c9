use emoji_tally::models::replay_messages;
use emoji_tally::{read_inbound_messages, EmojiTally, Error};
use log::{error, info};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

fn main() {
    // Initialize the logger
    env_logger::init();

    // Optional snapshot path: restored before replaying, written back afterwards
    let snapshot_path = std::env::args().nth(1);

    if let Err(e) = run(snapshot_path.as_deref()) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(snapshot_path: Option<&str>) -> Result<(), Error> {
    let mut tally = EmojiTally::new();

    if let Some(path) = snapshot_path {
        if Path::new(path).exists() {
            tally.restore_snapshot(BufReader::new(File::open(path)?))?;
        } else {
            info!("No snapshot at {}, starting empty", path);
        }
    }

    // Read the inbound message stream from stdin
    let messages = read_inbound_messages(io::stdin().lock(), tally.now())?;

    for reply in replay_messages(&mut tally, &messages) {
        println!("{}", reply);
    }

    if let Some(path) = snapshot_path {
        tally.write_snapshot(BufWriter::new(File::create(path)?))?;
        info!("Snapshot written to {}", path);
    }

    let status = serde_json::to_string_pretty(&tally.snapshot_status())
        .map_err(|e| Error::Other(format!("Failed to serialize status: {}", e)))?;
    println!("{}", status);

    Ok(())
}
