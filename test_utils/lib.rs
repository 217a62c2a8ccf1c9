pub mod constants;

use chrono::{TimeZone, Utc};
use constants::INBOUND_CSV_HEADER_ROW;
use std::{fs, path::Path};

/// Unix timestamp of noon UTC on the 15th of the given month.
pub fn timestamp_for(month: u32, year: i32) -> i64 {
    Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0)
        .single()
        .expect("Invalid fixture date")
        .timestamp()
}

/// Utility to build an inbound message CSV document from raw rows.
///
/// Each row is `(group_id, user_id, display_name, is_group, timestamp, text)`. Fields are
/// quoted so texts may contain commas.
pub fn build_inbound_csv(rows: &[(&str, &str, &str, bool, i64, &str)]) -> String {
    let mut csv = String::from(INBOUND_CSV_HEADER_ROW);
    csv.push('\n');

    for (group_id, user_id, display_name, is_group, timestamp, text) in rows {
        let fields = [
            group_id.to_string(),
            user_id.to_string(),
            display_name.to_string(),
            is_group.to_string(),
            timestamp.to_string(),
            text.to_string(),
        ];

        let quoted: Vec<String> = fields
            .iter()
            .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
            .collect();

        csv.push_str(&quoted.join(","));
        csv.push('\n');
    }

    csv
}

// Helper function to split a scenario fixture into its CSV body and expected replies.
//
// Lines starting with `EXPECTED:` hold one expected reply each, with `\n` escapes for
// multi-line replies. Lines starting with `COMMENT:` are ignored.
pub fn read_scenario_file(file_path: &Path) -> (String, Vec<String>) {
    let content = fs::read_to_string(file_path).expect("Failed to read scenario file");

    let mut csv_lines = Vec::new();
    let mut expected_replies = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim_start();

        if let Some(expected) = trimmed.strip_prefix("EXPECTED:") {
            expected_replies.push(expected.trim().replace("\\n", "\n"));
        } else if !trimmed.starts_with("COMMENT:") && !trimmed.is_empty() {
            csv_lines.push(line);
        }
    }

    (csv_lines.join("\n"), expected_replies)
}
