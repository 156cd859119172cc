use serde::Serialize;

use crate::domain::lap::{LapRecord, NO_TIME_MS, TimeCodec};

/// Aggregate figures for a displayed record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LapStats {
    pub count: usize,
    /// Fastest real lap in milliseconds, [`NO_TIME_MS`] when there is none.
    pub fastest_time_ms: i64,
    /// Mean reported power, rounded half up; `0` when nothing was reported.
    pub average_power: i64,
}

impl Default for LapStats {
    fn default() -> Self {
        Self {
            count: 0,
            fastest_time_ms: NO_TIME_MS,
            average_power: 0,
        }
    }
}

impl LapStats {
    /// Fastest time formatted for display (`"--:--.--"` when absent).
    pub fn fastest_time(&self) -> String {
        TimeCodec::format(self.fastest_time_ms)
    }
}

pub struct StatsAggregator;

impl StatsAggregator {
    /// Summarizes exactly the records given.
    ///
    /// The fastest time is taken from these records only; pass the whole
    /// store to get the global best.
    pub fn summarize(records: &[LapRecord]) -> LapStats {
        let fastest_time_ms = records
            .iter()
            .map(|record| TimeCodec::parse_opt(record.time.as_deref()))
            .filter(|ms| TimeCodec::is_real(*ms))
            .min()
            .unwrap_or(NO_TIME_MS);

        let powers: Vec<f64> = records.iter().filter_map(LapRecord::reported_power).collect();
        let average_power = if powers.is_empty() {
            0
        } else {
            let mean = powers.iter().sum::<f64>() / powers.len() as f64;
            (mean + 0.5).floor() as i64
        };

        LapStats {
            count: records.len(),
            fastest_time_ms,
            average_power,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lap::{NO_TIME_TEXT, PowerValue};

    fn lap(time: Option<&str>, power: Option<PowerValue>) -> LapRecord {
        LapRecord {
            time: time.map(String::from),
            power,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_set() {
        let stats = StatsAggregator::summarize(&[]);
        assert_eq!(stats, LapStats::default());
        assert_eq!(stats.count, 0);
        assert_eq!(stats.fastest_time(), NO_TIME_TEXT);
        assert_eq!(stats.average_power, 0);
    }

    #[test]
    fn test_fastest_ignores_missing_times() {
        let stats = StatsAggregator::summarize(&[
            lap(Some("--:--.--"), None),
            lap(Some("1:31.250"), None),
            lap(None, None),
            lap(Some("1:29.900"), None),
        ]);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.fastest_time(), "1:29.900");
    }

    #[test]
    fn test_no_real_times() {
        let stats = StatsAggregator::summarize(&[lap(None, None), lap(Some("soon"), None)]);
        assert_eq!(stats.fastest_time_ms, NO_TIME_MS);
        assert_eq!(stats.fastest_time(), NO_TIME_TEXT);
    }

    #[test]
    fn test_zero_time_counts_as_real() {
        let stats = StatsAggregator::summarize(&[lap(Some("0:00.000"), None)]);
        assert_eq!(stats.fastest_time(), "0:00.000");
    }

    #[test]
    fn test_average_power_skips_unreported() {
        let stats = StatsAggregator::summarize(&[
            lap(None, Some(PowerValue::Number(300.0))),
            lap(None, Some(PowerValue::Text("201".to_string()))),
            lap(None, Some(PowerValue::Text("unknown".to_string()))),
            lap(None, Some(PowerValue::Number(0.0))),
            lap(None, None),
        ]);
        // (300 + 201) / 2 = 250.5, rounded half up
        assert_eq!(stats.average_power, 251);
    }

    #[test]
    fn test_average_power_rounds_to_nearest() {
        let stats = StatsAggregator::summarize(&[
            lap(None, Some(PowerValue::Number(100.0))),
            lap(None, Some(PowerValue::Number(100.0))),
            lap(None, Some(PowerValue::Number(101.0))),
        ]);
        assert_eq!(stats.average_power, 100);
    }
}
