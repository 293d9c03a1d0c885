//! CSV decoding into header-keyed rows

use std::collections::HashMap;

use crate::error::SourceError;

/// One data row, keyed by (trimmed) header name.
pub type RawRow = HashMap<String, String>;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode a CSV document with a header line into rows.
///
/// A leading UTF-8 byte-order mark is ignored. Rows shorter than the header
/// simply lack the trailing columns; cells beyond the header are dropped.
pub fn parse_rows(bytes: &[u8]) -> Result<Vec<RawRow>, SourceError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.to_string(), cell.to_string()))
            .collect();
        rows.push(row);
    }

    log::debug!("Decoded {} CSV row(s) with columns {:?}", rows.len(), headers);
    Ok(rows)
}
