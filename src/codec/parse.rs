use csv::{ReaderBuilder, Trim};

use crate::codec::timestamp::parse_timestamp;
use crate::models::{CatalogEntry, Sample};
use crate::log_debug;

const ENABLE_LOGS: bool = true;

/// Rows kept from a lenient parse, plus how many were dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub rows: Vec<T>,
    pub skipped: usize,
}

/// Drop the header line, read the rest as unquoted CSV, and hand the first
/// two trimmed fields of each record to `map_row`.
///
/// Records with a missing or blank field, or that `map_row` rejects, are
/// counted as skipped. Extra columns are ignored. Quote characters are kept
/// as literal text.
fn parse_rows<T, F>(text: &str, mut map_row: F) -> Parsed<T>
where
    F: FnMut(&str, &str) -> Option<T>,
{
    let mut rows = Vec::new();
    let mut skipped = 0;

    // The first line is a header whatever it contains.
    let body = text.split_once('\n').map_or("", |(_, rest)| rest);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                log_debug!("Skipping unreadable record: {err}");
                skipped += 1;
                continue;
            }
        };
        // +1 for the stripped header line
        let line_no = record.position().map_or(0, |pos| pos.line()) + 1;

        let first = record.get(0).unwrap_or_default();
        let second = record.get(1).unwrap_or_default();

        if first.is_empty() || second.is_empty() {
            // Whitespace-only lines are not worth reporting.
            if record.iter().any(|field| !field.is_empty()) {
                log_debug!("Skipping line {line_no}: missing field");
                skipped += 1;
            }
            continue;
        }

        match map_row(first, second) {
            Some(row) => rows.push(row),
            None => {
                log_debug!("Skipping line {line_no}: unparseable row {:?}", record);
                skipped += 1;
            }
        }
    }

    Parsed { rows, skipped }
}

/// Parse `(timestamp, value)` rows. Rows whose timestamp does not parse or
/// whose value is not a finite number are dropped.
pub fn parse_samples_detailed(text: &str) -> Parsed<Sample> {
    parse_rows(text, |timestamp, value| {
        let timestamp = parse_timestamp(timestamp)?;
        let value = value.parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(Sample::new(timestamp, value))
    })
}

pub fn parse_samples(text: &str) -> Vec<Sample> {
    let parsed = parse_samples_detailed(text);
    if parsed.skipped > 0 {
        log_debug!("Dropped {} malformed series rows", parsed.skipped);
    }
    parsed.rows
}

/// Parse `(subsystem, tagName)` rows.
pub fn parse_catalog(text: &str) -> Vec<CatalogEntry> {
    let parsed = parse_rows(text, |subsystem, tag_name| {
        Some(CatalogEntry {
            subsystem: subsystem.to_string(),
            tag_name: tag_name.to_string(),
        })
    });
    if parsed.skipped > 0 {
        log_debug!("Dropped {} malformed catalog rows", parsed.skipped);
    }
    parsed.rows
}
