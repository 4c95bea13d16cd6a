//! Central time clock and date formatting
//!
//! The browser's `Intl.DateTimeFormat` does the time zone work with its own
//! tz data. This module builds the format options and collapses whatever
//! zone text comes back into one fixed label.

use chrono::NaiveDate;
use serde::Serialize;

use crate::consts::{CLOCK_LABEL, CLOCK_LOCALE, CLOCK_TIME_ZONE};

/// `Intl.DateTimeFormat` options for the clock
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockFormatOptions {
    pub time_zone: &'static str,
    pub hour: &'static str,
    pub minute: &'static str,
    pub hour12: bool,
}

impl Default for ClockFormatOptions {
    fn default() -> Self {
        Self {
            time_zone: CLOCK_TIME_ZONE,
            hour: "numeric",
            minute: "2-digit",
            hour12: true,
        }
    }
}

/// `h:mm AM/PM` plus the fixed zone label.
///
/// Newer ICU builds separate the day period with a narrow no-break space;
/// that becomes a plain space. Any Central zone abbreviation is dropped.
pub fn normalize_clock_text(raw: &str) -> String {
    let text = raw.replace(['\u{202f}', '\u{a0}'], " ");
    let time = text
        .split_whitespace()
        .filter(|word| !matches!(*word, "CT" | "CST" | "CDT"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} {}", time, CLOCK_LABEL)
}

/// en-US long date, e.g. `October 18, 2026`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Clock text for an instant (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn clock_text(date: &js_sys::Date) -> Result<String, wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};

    let options = serde_json::to_string(&ClockFormatOptions::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let options: js_sys::Object = js_sys::JSON::parse(&options)?.dyn_into()?;
    let locales = js_sys::Array::of1(&JsValue::from_str(CLOCK_LOCALE));

    let formatter = js_sys::Intl::DateTimeFormat::new(&locales, &options);
    let raw = formatter
        .format()
        .call1(&JsValue::NULL, date)?
        .as_string()
        .ok_or_else(|| JsValue::from_str("DateTimeFormat returned a non-string"))?;

    Ok(normalize_clock_text(&raw))
}

/// Clock text for right now, `None` (logged) if the browser refuses
#[cfg(target_arch = "wasm32")]
pub fn clock_text_now() -> Option<String> {
    match clock_text(&js_sys::Date::new_0()) {
        Ok(text) => Some(text),
        Err(e) => {
            log::warn!("Clock format failed: {:?}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain() {
        assert_eq!(normalize_clock_text("3:07 PM"), "3:07 PM CDT");
    }

    #[test]
    fn test_normalize_icu_spacing() {
        assert_eq!(normalize_clock_text("3:07\u{202f}PM"), "3:07 PM CDT");
        assert_eq!(normalize_clock_text("12:30\u{a0}AM"), "12:30 AM CDT");
    }

    #[test]
    fn test_normalize_zone_names() {
        assert_eq!(normalize_clock_text("9:15 AM CST"), "9:15 AM CDT");
        assert_eq!(normalize_clock_text("9:15 AM CT"), "9:15 AM CDT");
        assert_eq!(normalize_clock_text("9:15 AM CDT"), "9:15 AM CDT");
    }

    #[test]
    fn test_format_options_json() {
        let json = serde_json::to_value(ClockFormatOptions::default()).unwrap();
        assert_eq!(json["timeZone"], "America/Chicago");
        assert_eq!(json["hour"], "numeric");
        assert_eq!(json["minute"], "2-digit");
        assert_eq!(json["hour12"], true);
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(format_long_date(date), "October 18, 2026");
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(format_long_date(date), "March 5, 2026");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn at(iso: &str) -> js_sys::Date {
        js_sys::Date::new(&JsValue::from_str(iso))
    }

    #[wasm_bindgen_test]
    fn test_browser_tz_summer_and_winter() {
        assert_eq!(clock_text(&at("2026-07-04T20:07:00Z")).unwrap(), "3:07 PM CDT");
        // Standard time: real offset is -6, label stays fixed
        assert_eq!(clock_text(&at("2026-01-15T18:30:00Z")).unwrap(), "12:30 PM CDT");
    }

    #[wasm_bindgen_test]
    fn test_browser_tz_dst_switch() {
        // 2026-03-08 08:00 UTC is 03:00 CDT, one minute earlier is 01:59 CST
        assert_eq!(clock_text(&at("2026-03-08T07:59:00Z")).unwrap(), "1:59 AM CDT");
        assert_eq!(clock_text(&at("2026-03-08T08:00:00Z")).unwrap(), "3:00 AM CDT");
    }
}
