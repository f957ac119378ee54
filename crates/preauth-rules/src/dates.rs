//! Best-effort date rendering for the form's `DD-MM-YYYY` date fields.
//!
//! Parsing never fails outward: a value that matches none of the accepted
//! layouts is returned unchanged.

use jiff::civil::Date;

pub const OUTPUT_FORMAT: &str = "%d-%m-%Y";

// Month-first before day-first for ambiguous slash and dash dates. The
// two-digit-year layouts come first since `%Y` also accepts `24`.
const DATE_FORMATS: &[&str] = &[
    "%m/%d/%y",
    "%d/%m/%y",
    "%m-%d-%y",
    "%d-%m-%y",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%Y/%m/%d",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

// The offset is parsed but ignored: the date stays as written.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%:z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

// Anything earlier is a misread short year, not a patient date.
const MIN_YEAR: i16 = 1000;

/// Parse a calendar date out of `raw`, ignoring any time of day.
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    // UTC designator: the wall-clock date is already the one written.
    let local = raw.strip_suffix(['Z', 'z']).unwrap_or(raw);

    DATE_FORMATS
        .iter()
        .chain(DATETIME_FORMATS)
        .find_map(|format| strptime(format, raw))
        .or_else(|| DATETIME_FORMATS.iter().find_map(|format| strptime(format, local)))
        .or_else(|| OFFSET_FORMATS.iter().find_map(|format| strptime(format, raw)))
        .or_else(|| compact(raw))
}

fn strptime(format: &str, raw: &str) -> Option<Date> {
    Date::strptime(format, raw)
        .ok()
        .filter(|date| date.year() >= MIN_YEAR)
}

// YYYYMMDD, as exported by some practice-management systems.
fn compact(raw: &str) -> Option<Date> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = raw[..4].parse().ok()?;
    let month = raw[4..6].parse().ok()?;
    let day = raw[6..].parse().ok()?;
    Date::new(year, month, day).ok()
}

/// Render `raw` as `DD-MM-YYYY`. Empty stays empty; unparsable passes
/// through unchanged.
pub fn format_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    match parse_date(raw) {
        Some(date) => date.strftime(OUTPUT_FORMAT).to_string(),
        None => {
            tracing::debug!(len = raw.len(), "unparsable date, passing through");
            raw.to_string()
        }
    }
}
