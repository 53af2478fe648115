//! Text rendering of cell values
//!
//! Pure helpers the formatter widgets use to turn raw JSON cell values into
//! display strings. Unparseable input is shown verbatim rather than dropped.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// JavaScript-style falsiness: null, false, 0 and "" are empty
pub fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

/// Falsy, or an empty array
pub fn is_empty_list(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Array(items)) => items.is_empty(),
        other => is_falsy(other),
    }
}

/// Plain text of a value; strings are shown without quotes
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// String items of an array value
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn round8(x: f64) -> f64 {
    (x * 1e8).round() / 1e8
}

/// Render a number according to the column's number format
pub fn format_number(value: &Value, format: Option<&str>) -> String {
    let Some(n) = as_f64(value) else {
        return value_to_text(value);
    };
    match format.unwrap_or("number") {
        "percent" => format!("{}%", round8(n * 100.0)),
        "yuan" => format!("¥{:.2}", n),
        "dollar" => format!("${:.2}", n),
        "euro" => format!("€{:.2}", n),
        _ => format!("{}", round8(n)),
    }
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn chrono_pattern(format: &str) -> String {
    let date = if format.starts_with("M/D/YYYY") {
        "%-m/%-d/%Y"
    } else if format.starts_with("DD/MM/YYYY") {
        "%d/%m/%Y"
    } else if format.starts_with("DD.MM.YYYY") {
        "%d.%m.%Y"
    } else {
        "%Y-%m-%d"
    };
    if format.contains("HH:mm") {
        format!("{} %H:%M", date)
    } else {
        date.to_string()
    }
}

/// Render a date cell with a column date format (`"YYYY-MM-DD"`, `"YYYY-MM-DD HH:mm"`, ...)
pub fn format_date(value: &str, format: Option<&str>) -> String {
    match parse_datetime(value) {
        Some(dt) => dt
            .format(&chrono_pattern(format.unwrap_or("YYYY-MM-DD")))
            .to_string(),
        None => value.to_string(),
    }
}

/// Render a creation/modification timestamp
pub fn format_timestamp(value: &str) -> String {
    format_date(value, Some("YYYY-MM-DD HH:mm"))
}

/// Render a geolocation cell: address parts, or `lng, lat`
pub fn format_geolocation(value: &Value) -> String {
    let Value::Object(map) = value else {
        return value_to_text(value);
    };
    let address: Vec<&str> = ["province", "city", "district", "detail"]
        .iter()
        .filter_map(|key| map.get(*key).and_then(Value::as_str))
        .filter(|part| !part.is_empty())
        .collect();
    if !address.is_empty() {
        return address.join(" ");
    }
    match (map.get("lng"), map.get("lat")) {
        (Some(lng), Some(lat)) => format!("{}, {}", value_to_text(lng), value_to_text(lat)),
        _ => String::new(),
    }
}

/// Render a formula result according to its result type
pub fn format_formula(value: &Value, result_type: Option<&str>) -> String {
    match (result_type, value) {
        (Some("number"), _) => format_number(value, None),
        (Some("date"), Value::String(s)) => format_date(s, None),
        (Some("bool"), _) => (!is_falsy(Some(value))).to_string(),
        _ => value_to_text(value),
    }
}

/// Display name of a file cell entry
pub fn file_name(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            if let Some(name) = map.get("name").and_then(Value::as_str) {
                return name.to_string();
            }
            map.get("url")
                .and_then(Value::as_str)
                .map(url_file_name)
                .unwrap_or_default()
        }
        Value::String(url) => url_file_name(url),
        other => value_to_text(other),
    }
}

fn url_file_name(url: &str) -> String {
    url.rsplit('/').next().unwrap_or(url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy() {
        assert!(is_falsy(None));
        assert!(is_falsy(Some(&json!(null))));
        assert!(is_falsy(Some(&json!(false))));
        assert!(is_falsy(Some(&json!(0))));
        assert!(is_falsy(Some(&json!(""))));
        assert!(!is_falsy(Some(&json!([]))));
        assert!(!is_falsy(Some(&json!("x"))));
        assert!(!is_falsy(Some(&json!(0.5))));
    }

    #[test]
    fn test_empty_list() {
        assert!(is_empty_list(Some(&json!([]))));
        assert!(is_empty_list(None));
        assert!(!is_empty_list(Some(&json!(["a"]))));
    }

    #[test]
    fn test_number_formats() {
        assert_eq!(format_number(&json!(12), None), "12");
        assert_eq!(format_number(&json!(1.5), Some("number")), "1.5");
        assert_eq!(format_number(&json!(0.07), Some("percent")), "7%");
        assert_eq!(format_number(&json!(3), Some("dollar")), "$3.00");
        assert_eq!(format_number(&json!("2.5"), Some("euro")), "€2.50");
        assert_eq!(format_number(&json!("abc"), None), "abc");
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(format_date("2024-03-05", None), "2024-03-05");
        assert_eq!(
            format_date("2024-03-05 14:30", Some("YYYY-MM-DD HH:mm")),
            "2024-03-05 14:30"
        );
        assert_eq!(format_date("2024-03-05", Some("M/D/YYYY")), "3/5/2024");
        assert_eq!(format_date("2024-03-05", Some("DD/MM/YYYY")), "05/03/2024");
        assert_eq!(format_date("soon", None), "soon");
    }

    #[test]
    fn test_timestamp() {
        assert_eq!(format_timestamp("2024-03-05T14:30:00+00:00"), "2024-03-05 14:30");
    }

    #[test]
    fn test_geolocation() {
        assert_eq!(
            format_geolocation(&json!({"province": "Zhejiang", "city": "Hangzhou", "detail": ""})),
            "Zhejiang Hangzhou"
        );
        assert_eq!(format_geolocation(&json!({"lng": 120.1, "lat": 30.2})), "120.1, 30.2");
    }

    #[test]
    fn test_formula() {
        assert_eq!(format_formula(&json!(0.5), Some("number")), "0.5");
        assert_eq!(format_formula(&json!(true), Some("bool")), "true");
        assert_eq!(format_formula(&json!(["a", "b"]), Some("array")), "a, b");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(&json!({"name": "report.pdf", "url": "x"})), "report.pdf");
        assert_eq!(file_name(&json!({"url": "https://h/files/a.txt"})), "a.txt");
    }
}
