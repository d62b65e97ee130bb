use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A record that can be written to a sink. The partition key routes the
/// record to a shard when the sink is a data stream; file sinks ignore it.
pub trait Record: Serialize + Send + Sync {
    fn partition_key(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Warning,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Error => "ERROR",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Ticker {
    Aapl,
    Amzn,
    Msft,
    Intc,
    Tbv,
}

impl Ticker {
    pub const ALL: [Ticker; 5] = [
        Ticker::Aapl,
        Ticker::Amzn,
        Ticker::Msft,
        Ticker::Intc,
        Ticker::Tbv,
    ];
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Ticker::Aapl => "AAPL",
            Ticker::Amzn => "AMZN",
            Ticker::Msft => "MSFT",
            Ticker::Intc => "INTC",
            Ticker::Tbv => "TBV",
        };
        f.write_str(symbol)
    }
}

/// One synthetic temperature reading. `event_time` is the local wall clock
/// at generation time, serialized as a naive ISO-8601 timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub sensor_id: u32,
    pub current_temperature: f64,
    pub status: Status,
    pub event_time: NaiveDateTime,
}

impl Record for SensorReading {
    fn partition_key(&self) -> String {
        self.sensor_id.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockTick {
    pub event_time: NaiveDateTime,
    pub ticker: Ticker,
    pub price: f64,
}

impl Record for StockTick {
    fn partition_key(&self) -> String {
        self.ticker.to_string()
    }
}
