use chrono::{DateTime, NaiveDate, Utc};

/// Formats a UTC instant as the short label stamped on notifications and
/// chat messages. This is a display label, not a machine timestamp.
pub fn short_label(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M").to_string()
}

/// Label for the current instant.
pub fn now_label() -> String {
    short_label(Utc::now())
}

/// Today's date in UTC, used as the default ledger-entry date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
