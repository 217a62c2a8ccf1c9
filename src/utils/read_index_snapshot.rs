use crate::constants::SNAPSHOT_CSV_HEADERS;
use crate::models::IndexEntry;
use crate::types::OccurrenceCount;
use crate::{AggregationIndex, Error, PeriodKey};
use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use std::io::Read;

/// Rebuilds an index from a snapshot written by `write_index_snapshot`.
pub fn read_index_snapshot<R: Read>(reader: R) -> Result<AggregationIndex, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(GzDecoder::new(reader));

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let columns = SNAPSHOT_CSV_HEADERS
        .iter()
        .map(|name| column_position(&headers, name))
        .collect::<Result<Vec<usize>, Error>>()?;

    let mut entries = Vec::new();

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let period: PeriodKey = field(&record, &columns, 2)?.parse()?;

        let count = field(&record, &columns, 4)?
            .parse::<OccurrenceCount>()
            .map_err(|e| Error::ParserError(format!("Invalid count: {}", e)))?;

        if count == 0 {
            return Err(Error::ParserError(format!(
                "Zero count recorded for {} in {}",
                field(&record, &columns, 3)?,
                period
            )));
        }

        entries.push(IndexEntry {
            group_id: field(&record, &columns, 0)?.to_string(),
            symbol: field(&record, &columns, 1)?.to_string(),
            period,
            user_id: field(&record, &columns, 3)?.to_string(),
            count,
        });
    }

    Ok(entries.into_iter().collect())
}

fn field<'r>(
    record: &'r StringRecord,
    columns: &[usize],
    column: usize,
) -> Result<&'r str, Error> {
    record.get(columns[column]).ok_or_else(|| {
        Error::ParserError(format!("Missing '{}' field", SNAPSHOT_CSV_HEADERS[column]))
    })
}

fn column_position(headers: &StringRecord, name: &str) -> Result<usize, Error> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", name)))
}
