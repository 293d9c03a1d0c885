//! Row parsing and grouping by domain

use crate::error::{ImportResult, RowError};
use crate::types::{ChangeRequest, DomainGroup, ZoneVisibility, DEFAULT_TTL};
use crate::utils::csv_rows::RawRow;

fn required<'a>(row: &'a RawRow, field: &str, index: usize) -> Result<&'a str, RowError> {
    row.get(field)
        .map(String::as_str)
        .ok_or_else(|| RowError::MissingField {
            index,
            field: field.to_string(),
        })
}

/// Optional cell; absent and blank cells are both `None`.
fn optional<'a>(row: &'a RawRow, field: &str) -> Option<&'a str> {
    row.get(field).map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Turn one raw row into a validated [`ChangeRequest`].
///
/// `index` is the 1-based row position used in error reports. Checks run in
/// this order: required columns, action, record type, zone type, TTL.
pub fn parse_row(index: usize, row: &RawRow) -> Result<ChangeRequest, RowError> {
    let action = required(row, "action", index)?;
    let domain_name = required(row, "domain_name", index)?;
    let record_name = required(row, "record_name", index)?;
    let value = required(row, "value", index)?;
    let record_type = required(row, "record_type", index)?;

    let builder =
        ChangeRequest::builder(action, domain_name, record_name, record_type).value(value);

    let request = builder.clone().build();
    if !request.is_valid_action() {
        return Err(RowError::InvalidAction {
            index,
            action: action.to_string(),
        });
    }
    if !request.is_valid_record_type() {
        return Err(RowError::UnrecognizedRecordType {
            index,
            record_type: record_type.to_string(),
        });
    }

    let visibility = match optional(row, "zone_type") {
        None => ZoneVisibility::default(),
        Some(raw) => raw
            .parse::<ZoneVisibility>()
            .map_err(|zone_type| RowError::UnrecognizedZoneType { index, zone_type })?,
    };

    let ttl = match optional(row, "ttl") {
        None => DEFAULT_TTL,
        Some(raw) => raw.parse::<u32>().map_err(|_| RowError::InvalidTtl {
            index,
            ttl: raw.to_string(),
        })?,
    };

    Ok(builder.visibility(visibility).ttl(ttl).build())
}

/// Parse every row and group the requests by normalized domain.
///
/// The first invalid row aborts; no partial group is returned.
pub fn group_by_domain(rows: &[RawRow]) -> ImportResult<DomainGroup> {
    let mut group = DomainGroup::new();
    for (offset, row) in rows.iter().enumerate() {
        let request = parse_row(offset + 1, row)?;
        group.push(request);
    }

    log::debug!(
        "Grouped {} request(s) into {} domain(s)",
        group.request_count(),
        group.len()
    );
    Ok(group)
}
