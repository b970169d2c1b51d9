use chrono::{Local, NaiveDate};

/// Wire format of `<input type="date">` values.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Value for the `min` attribute of date inputs.
pub fn min_input_date(today: NaiveDate) -> String {
    today.format(INPUT_DATE_FORMAT).to_string()
}

pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), INPUT_DATE_FORMAT).ok()
}

/// Formats an input date the way en-IN renders `day: numeric, month: short,
/// year: numeric`, e.g. `19 Oct 2026`. Unparseable input is echoed back.
pub fn format_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    match parse_input_date(raw) {
        Some(date) => date.format("%-d %b %Y").to_string(),
        None => raw.to_string(),
    }
}

/// True when `raw` is a valid date earlier than `today`.
pub fn is_before(raw: &str, today: NaiveDate) -> bool {
    parse_input_date(raw).map_or(false, |date| date < today)
}
