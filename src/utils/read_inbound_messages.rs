use crate::constants::INBOUND_CSV_HEADERS;
use crate::types::UnixTimestamp;
use crate::{Error, InboundMessage};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

/// Reads inbound messages from a CSV stream with the `INBOUND_CSV_HEADERS` columns.
///
/// Columns are matched by header name. A blank `Display Name` means the transport could
/// not resolve the contact, and a blank `Timestamp` falls back to `now`.
pub fn read_inbound_messages<R: Read>(
    reader: R,
    now: UnixTimestamp,
) -> Result<Vec<InboundMessage>, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let columns = INBOUND_CSV_HEADERS
        .iter()
        .map(|name| {
            headers
                .iter()
                .position(|header| header == *name)
                .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", name)))
        })
        .collect::<Result<Vec<usize>, Error>>()?;

    let mut messages = Vec::new();

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let display_name = field(&record, &columns, 2)?.trim();
        let timestamp = field(&record, &columns, 4)?.trim();

        messages.push(InboundMessage {
            group_id: field(&record, &columns, 0)?.to_string(),
            user_id: field(&record, &columns, 1)?.to_string(),
            display_name: Some(display_name)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            is_group_chat: parse_bool(field(&record, &columns, 3)?)?,
            text: field(&record, &columns, 5)?.to_string(),
            timestamp: if timestamp.is_empty() {
                now
            } else {
                timestamp
                    .parse::<UnixTimestamp>()
                    .map_err(|e| Error::ParserError(format!("Invalid timestamp: {}", e)))?
            },
        });
    }

    Ok(messages)
}

fn field<'r>(
    record: &'r StringRecord,
    columns: &[usize],
    column: usize,
) -> Result<&'r str, Error> {
    record.get(columns[column]).ok_or_else(|| {
        Error::ParserError(format!("Missing '{}' field", INBOUND_CSV_HEADERS[column]))
    })
}

fn parse_bool(value: &str) -> Result<bool, Error> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(Error::ParserError(format!(
            "Invalid 'Is Group' value: {}",
            other
        ))),
    }
}
