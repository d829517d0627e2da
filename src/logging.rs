use serde::Serialize;
use serde_json::{Map, Number, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// Writes one JSON object per line, dropping events below `min_level`.
#[derive(Clone, Copy, Debug)]
pub struct Logger {
    min_level: LogLevel,
}

impl Logger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn debug(&self, event: &str, fields: Value) {
        self.log(LogLevel::Debug, event, fields);
    }

    pub fn info(&self, event: &str, fields: Value) {
        self.log(LogLevel::Info, event, fields);
    }

    pub fn warn(&self, event: &str, fields: Value) {
        self.log(LogLevel::Warn, event, fields);
    }

    pub fn log(&self, level: LogLevel, event: &str, fields: Value) {
        if let Some(line) = self.event_line(level, event, fields, now_unix_millis()) {
            emit(level, &line);
        }
    }

    fn event_line(&self, level: LogLevel, event: &str, fields: Value, ts: u64) -> Option<String> {
        if level < self.min_level {
            return None;
        }

        let mut payload = Map::new();
        payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
        payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
        payload.insert("event".to_string(), Value::String(event.to_string()));

        if let Value::Object(extra) = fields {
            for (key, value) in extra {
                payload.insert(key, value);
            }
        }

        Some(Value::Object(payload).to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Debug => web_sys::console::debug_1(&line),
        LogLevel::Info => web_sys::console::info_1(&line),
        LogLevel::Warn => web_sys::console::warn_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    eprintln!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_below_min_level_are_dropped() {
        let logger = Logger::new(LogLevel::Info);

        assert!(logger
            .event_line(LogLevel::Debug, "section_revealed", json!({}), 1)
            .is_none());
        assert!(logger
            .event_line(LogLevel::Warn, "component_failed", json!({}), 1)
            .is_some());
    }

    #[test]
    fn event_line_merges_fields_after_envelope() {
        let logger = Logger::new(LogLevel::Debug);
        let line = logger
            .event_line(
                LogLevel::Info,
                "theme_toggled",
                json!({ "theme": "dark" }),
                1_700_000_000_000,
            )
            .expect("info passes a debug filter");

        let parsed: Value = serde_json::from_str(&line).expect("line is JSON");
        assert_eq!(parsed["ts"], json!(1_700_000_000_000_u64));
        assert_eq!(parsed["level"], json!("info"));
        assert_eq!(parsed["event"], json!("theme_toggled"));
        assert_eq!(parsed["theme"], json!("dark"));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let logger = Logger::new(LogLevel::Debug);
        let line = logger
            .event_line(LogLevel::Info, "page_ready", json!("stray"), 5)
            .expect("logged");

        let parsed: Value = serde_json::from_str(&line).expect("line is JSON");
        assert_eq!(parsed.as_object().map(Map::len), Some(3));
    }

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), None);
        assert_eq!(serde_json::to_value(LogLevel::Warn).ok(), Some(json!("warn")));
    }
}
