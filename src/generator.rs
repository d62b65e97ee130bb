use chrono::Local;
use rand::Rng;

use crate::event::{SensorReading, Status, StockTick, Ticker};

/// Produce one randomized sensor reading.
///
/// The status policy keeps the upstream consumers' expectations intact:
/// anything above 160 degrees is an ERROR, readings above 140 degrees or an
/// independent 1-in-5 roll escalate to a coin flip between WARNING and ERROR,
/// everything else reports OK. Rounding to two decimals happens before the
/// thresholds are applied.
pub fn sensor_reading<R: Rng>(rng: &mut R) -> SensorReading {
    let current_temperature = round2(10.0 + rng.gen::<f64>() * 170.0);
    let status = if current_temperature > 160.0 {
        Status::Error
    } else if current_temperature > 140.0 || rng.gen_range(1..100) > 80 {
        if rng.gen::<bool>() {
            Status::Warning
        } else {
            Status::Error
        }
    } else {
        Status::Ok
    };

    SensorReading {
        sensor_id: rng.gen_range(1..100),
        current_temperature,
        status,
        event_time: Local::now().naive_local(),
    }
}

/// Produce one randomized stock tick over the fixed symbol set.
pub fn stock_tick<R: Rng>(rng: &mut R) -> StockTick {
    let ticker = Ticker::ALL[rng.gen_range(0..Ticker::ALL.len())];
    StockTick {
        event_time: Local::now().naive_local(),
        ticker,
        price: round2(rng.gen::<f64>() * 100.0),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn has_two_decimals(value: f64) -> bool {
        ((value * 100.0).round() - value * 100.0).abs() < 1e-9
    }

    #[test]
    fn sensor_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10_000 {
            let reading = sensor_reading(&mut rng);
            assert!(
                (10.0..=180.0).contains(&reading.current_temperature),
                "temperature out of range: {}",
                reading.current_temperature
            );
            assert!(
                has_two_decimals(reading.current_temperature),
                "temperature not rounded to two decimals: {}",
                reading.current_temperature
            );
            assert!(
                (1..=99).contains(&reading.sensor_id),
                "sensor id out of range: {}",
                reading.sensor_id
            );
        }
    }

    #[test]
    fn overheated_readings_always_report_error() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut hot_samples = 0usize;
        for _ in 0..10_000 {
            let reading = sensor_reading(&mut rng);
            if reading.current_temperature > 160.0 {
                hot_samples += 1;
                assert_eq!(
                    reading.status,
                    Status::Error,
                    "reading at {} must be ERROR",
                    reading.current_temperature
                );
            }
        }
        assert!(hot_samples > 0, "expected some readings above 160 degrees");
    }

    #[test]
    fn all_statuses_are_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<Status> = (0..10_000).map(|_| sensor_reading(&mut rng).status).collect();
        assert!(seen.contains(&Status::Ok), "OK never produced");
        assert!(seen.contains(&Status::Warning), "WARNING never produced");
        assert!(seen.contains(&Status::Error), "ERROR never produced");
    }

    #[test]
    fn cool_readings_are_mostly_ok() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cool = 0usize;
        let mut cool_ok = 0usize;
        for _ in 0..10_000 {
            let reading = sensor_reading(&mut rng);
            if reading.current_temperature <= 140.0 {
                cool += 1;
                if reading.status == Status::Ok {
                    cool_ok += 1;
                }
            }
        }
        // Below the threshold only the secondary 19-in-99 roll escalates.
        assert!(cool > 0);
        assert!(
            cool_ok as f64 > cool as f64 * 0.7,
            "expected most cool readings OK, got {cool_ok}/{cool}"
        );
    }

    #[test]
    fn stock_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let tick = stock_tick(&mut rng);
            assert!(
                (0.0..=100.0).contains(&tick.price),
                "price out of range: {}",
                tick.price
            );
            assert!(
                has_two_decimals(tick.price),
                "price not rounded to two decimals: {}",
                tick.price
            );
            seen.insert(tick.ticker);
        }
        assert_eq!(seen.len(), Ticker::ALL.len(), "all symbols should appear");
    }
}
