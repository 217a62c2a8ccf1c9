use crate::constants::SNAPSHOT_CSV_HEADERS;
use crate::{AggregationIndex, Error};
use csv::WriterBuilder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Writes every leaf of the index as a gzip-compressed CSV document.
///
/// Rows are written in sorted order so that identical indexes produce identical
/// snapshots.
pub fn write_index_snapshot<W: Write>(index: &AggregationIndex, writer: W) -> Result<(), Error> {
    let encoder = GzEncoder::new(writer, Compression::default());

    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(encoder);
    csv_writer.write_record(SNAPSHOT_CSV_HEADERS)?;

    for entry in index.entries() {
        csv_writer.write_record([
            entry.group_id.as_str(),
            entry.symbol.as_str(),
            entry.period.to_string().as_str(),
            entry.user_id.as_str(),
            entry.count.to_string().as_str(),
        ])?;
    }

    let encoder = csv_writer
        .into_inner()
        .map_err(|e| Error::Other(format!("Failed to flush snapshot: {}", e)))?;

    let mut writer = encoder.finish()?;
    writer.flush()?;

    Ok(())
}
