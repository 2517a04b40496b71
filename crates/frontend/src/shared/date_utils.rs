//! Utilities for date and time formatting (pt-BR)

/// Format RFC 3339 datetime string to DD/MM/YYYY HH:MM:SS (UTC)
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt
            .with_timezone(&chrono::Utc)
            .format("%d/%m/%Y %H:%M:%S")
            .to_string(),
        Err(_) => datetime_str.to_string(),
    }
}

/// Current local time as the browser prints it for pt-BR
pub fn now_local_pt_br() -> String {
    js_sys::Date::new_0()
        .to_locale_string("pt-BR", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}
