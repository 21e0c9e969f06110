use chrono::NaiveDate;

use crate::constants::dates::{QUERY_DATE_FORMAT, QUERY_DATE_LEN};

/// Strictly parse a `YYYY-MM-DD` query date.
///
/// Requires exactly four year digits, two month digits, and two day digits
/// separated by `-`, naming a real calendar day. Returns `None` otherwise
/// (`2024-1-5`, `2024-02-30`, and surrounding whitespace are all rejected).
pub fn parse_query_date(value: &str) -> Option<NaiveDate> {
    if value.len() != QUERY_DATE_LEN {
        return None;
    }
    let well_formed = value.bytes().enumerate().all(|(idx, byte)| match idx {
        4 | 7 => byte == b'-',
        _ => byte.is_ascii_digit(),
    });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(value, QUERY_DATE_FORMAT).ok()
}
