use chrono::{DateTime, Utc};

use super::{SampleSeries, WeightSample};
use crate::storage::KeyValueStore;

/// The only key the weight log reads or writes.
pub const WEIGHTS_KEY: &str = "weights";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightError {
    #[error("weight is not a number")]
    NotANumber,
    #[error("weight must be greater than zero")]
    NotPositive,
}

/// Parses a weight typed by the user.
pub fn parse_weight(raw: &str) -> Result<f64, WeightError> {
    let weight: f64 = raw.trim().parse().map_err(|_| WeightError::NotANumber)?;
    validate(weight)
}

fn validate(weight: f64) -> Result<f64, WeightError> {
    if !weight.is_finite() {
        return Err(WeightError::NotANumber);
    }
    if weight <= 0.0 {
        return Err(WeightError::NotPositive);
    }
    Ok(weight)
}

/// Reads the persisted series. Missing or malformed data yields an empty series.
pub fn load(store: &dyn KeyValueStore) -> SampleSeries {
    let Some(raw) = store.get(WEIGHTS_KEY) else {
        return SampleSeries::new();
    };
    serde_json::from_str(&raw).unwrap_or_else(|err| {
        log::debug!("Discarding malformed weight log: {err}");
        SampleSeries::new()
    })
}

/// Records `weight` now. See [`append_at`].
pub fn append(store: &mut dyn KeyValueStore, weight: f64) -> Result<SampleSeries, WeightError> {
    append_at(store, weight, Utc::now())
}

/// Appends a sample stamped `timestamp` and persists the bounded series.
///
/// Invalid weights leave the store untouched.
pub fn append_at(
    store: &mut dyn KeyValueStore,
    weight: f64,
    timestamp: DateTime<Utc>,
) -> Result<SampleSeries, WeightError> {
    let weight = validate(weight)?;

    let mut series = load(store);
    if let Some(evicted) = series.push(WeightSample::new(timestamp, weight)) {
        log::debug!("Evicted weight sample from {}", evicted.timestamp());
    }
    save(store, &series);
    Ok(series)
}

/// Drops every recorded sample.
pub fn clear(store: &mut dyn KeyValueStore) {
    match store.remove(WEIGHTS_KEY) {
        Ok(()) => log::info!("Cleared weight log"),
        Err(err) => log::warn!("Failed to clear weight log: {err}"),
    }
}

fn save(store: &mut dyn KeyValueStore, series: &SampleSeries) {
    let result = serde_json::to_string(series)
        .map_err(Into::into)
        .and_then(|raw| store.set(WEIGHTS_KEY, raw));
    if let Err(err) = result {
        log::warn!("Failed to persist weight log: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::weights::MAX_SAMPLES;
    use chrono::{Duration, TimeZone};

    fn day(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 7, 0, 0).unwrap() + Duration::days(n)
    }

    fn weights(series: &SampleSeries) -> Vec<f64> {
        series.iter().map(WeightSample::weight).collect()
    }

    #[test]
    fn test_keeps_last_fourteen_in_insertion_order() {
        for n in [1usize, 13, 14, 15, 30] {
            let mut store = MemoryStore::default();
            for i in 0..n {
                append_at(&mut store, 60.0 + i as f64, day(i as i64)).unwrap();
            }
            let loaded = load(&store);
            let expected: Vec<f64> = (n.saturating_sub(MAX_SAMPLES)..n)
                .map(|i| 60.0 + i as f64)
                .collect();
            assert_eq!(weights(&loaded), expected, "after {n} appends");
        }
    }

    #[test]
    fn test_eviction_ignores_timestamps() {
        let mut store = MemoryStore::default();
        append_at(&mut store, 50.0, day(100)).unwrap();
        for i in 0..MAX_SAMPLES {
            append_at(&mut store, 70.0, day(i as i64)).unwrap();
        }
        let loaded = load(&store);
        assert_eq!(loaded.len(), MAX_SAMPLES);
        assert!(loaded.iter().all(|s| s.weight() == 70.0));
    }

    #[test]
    fn test_invalid_weight_is_noop() {
        let mut store = MemoryStore::default();
        append_at(&mut store, 80.0, day(0)).unwrap();
        let before = store.get(WEIGHTS_KEY);

        assert_eq!(append_at(&mut store, 0.0, day(1)), Err(WeightError::NotPositive));
        assert_eq!(append_at(&mut store, -3.0, day(1)), Err(WeightError::NotPositive));
        assert_eq!(append_at(&mut store, f64::NAN, day(1)), Err(WeightError::NotANumber));
        assert_eq!(parse_weight("abc"), Err(WeightError::NotANumber));
        assert_eq!(parse_weight(""), Err(WeightError::NotANumber));
        assert_eq!(store.get(WEIGHTS_KEY), before);
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight(" 79.5 "), Ok(79.5));
        assert_eq!(parse_weight("0"), Err(WeightError::NotPositive));
        assert_eq!(parse_weight("inf"), Err(WeightError::NotANumber));
    }

    #[test]
    fn test_clear_then_load_is_empty() {
        let mut store = MemoryStore::default();
        append_at(&mut store, 80.0, day(0)).unwrap();
        clear(&mut store);
        assert!(load(&store).is_empty());

        clear(&mut store);
        assert!(load(&store).is_empty());
    }

    #[test]
    fn test_round_trip() {
        let mut store = MemoryStore::default();
        let appended = [80.0, 79.5, 79.0]
            .into_iter()
            .enumerate()
            .map(|(i, w)| append_at(&mut store, w, day(i as i64)).unwrap())
            .last()
            .unwrap();

        let loaded = load(&store);
        assert_eq!(loaded, appended);
        let pairs: Vec<_> = loaded.iter().map(|s| (s.timestamp(), s.weight())).collect();
        assert_eq!(pairs, vec![(day(0), 80.0), (day(1), 79.5), (day(2), 79.0)]);
    }

    #[test]
    fn test_malformed_data_loads_empty() {
        let mut store = MemoryStore::default();
        for raw in ["not json", r#"{"weight":80}"#, r#"[{"date":"yesterday","weight":80}]"#] {
            store.set(WEIGHTS_KEY, raw.to_string()).unwrap();
            assert!(load(&store).is_empty(), "{raw}");
        }

        append_at(&mut store, 72.0, day(0)).unwrap();
        assert_eq!(weights(&load(&store)), vec![72.0]);
    }

    #[test]
    fn test_touches_only_weights_key() {
        let mut store = MemoryStore::default();
        store.set("dailyGoal", "2000".to_string()).unwrap();
        append(&mut store, 75.0).unwrap();
        clear(&mut store);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("dailyGoal").as_deref(), Some("2000"));
    }
}
