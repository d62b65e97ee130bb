//! Line-oriented JSON logging. Info goes to stdout, warnings to stderr, one
//! object per line so log shippers can ingest the feed output alongside the
//! generated data files.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Level {
    Info,
    Warn,
}

#[derive(Serialize)]
struct LogLine<'a> {
    level: Level,
    event: &'a str,
    message: &'a str,
    timestamp_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Value>,
}

fn emit(level: Level, event: &str, message: &str, metadata: Option<Value>) {
    let line = LogLine {
        level,
        event,
        message,
        timestamp_ms: timestamp_ms(),
        metadata,
    };

    match serde_json::to_string(&line) {
        Ok(payload) if level == Level::Info => println!("{payload}"),
        Ok(payload) => eprintln!("{payload}"),
        Err(err) => eprintln!(
            "{{\"level\":\"error\",\"event\":\"logging_failure\",\"message\":\"failed to serialise log\",\"error\":\"{err}\"}}"
        ),
    }
}

pub fn info(event: &str, message: &str, metadata: Value) {
    emit(Level::Info, event, message, Some(metadata));
}

pub fn warn(event: &str, message: &str, metadata: Value) {
    emit(Level::Warn, event, message, Some(metadata));
}

pub fn info_simple(event: &str, message: &str) {
    emit(Level::Info, event, message, None);
}

fn timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis()
}
