use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Price as shown in the list, always two decimals
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Accepts a plain `YYYY-MM-DD` date or a full timestamp
pub fn parse_booking_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|datetime| datetime.date())
}

/// Short locale date. Input that doesn't parse is returned as-is.
pub fn format_date(raw: &str) -> String {
    match parse_booking_date(raw) {
        Some(date) => locale_short_date(date),
        None => raw.to_string(),
    }
}

// Built from calendar parts so the browser's timezone can't shift the day
#[cfg(target_arch = "wasm32")]
fn locale_short_date(date: NaiveDate) -> String {
    let locale = web_sys::window()
        .and_then(|window| window.navigator().language())
        .unwrap_or_else(|| "en-US".to_string());
    let js_date = js_sys::Date::new_with_year_month_day(
        date.year() as u32,
        date.month0() as i32,
        date.day() as i32,
    );
    js_date
        .to_locale_date_string(&locale, &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

#[cfg(not(target_arch = "wasm32"))]
fn locale_short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
