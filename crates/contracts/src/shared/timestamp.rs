use chrono::{DateTime, SecondsFormat, Utc};

/// RFC 3339 в UTC с миллисекундами: `2024-05-01T12:30:00.123Z`
pub fn to_iso(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_iso() -> String {
    to_iso(Utc::now())
}
