//! Export file name derivation

use chrono::NaiveDate;

/// Replace every run of whitespace in `name` with a single `separator`.
///
/// Leading and trailing runs are replaced too, not trimmed.
pub fn collapse_whitespace(name: &str, separator: char) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push(separator);
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// `classification-<name>-<YYYY-MM-DD>.csv`, whitespace runs → `-`
pub fn csv_file_name(data_name: &str, date: NaiveDate) -> String {
    format!(
        "classification-{}-{}.csv",
        collapse_whitespace(data_name, '-'),
        date.format("%Y-%m-%d")
    )
}

/// `<name>_classification.json`, whitespace runs → `_`
pub fn json_file_name(data_name: &str) -> String {
    format!("{}_classification.json", collapse_whitespace(data_name, '_'))
}
