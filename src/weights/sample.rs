use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::CircularBuffer;

/// Number of samples kept; older entries fall off the front.
pub const MAX_SAMPLES: usize = 14;

/// One recorded body weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    #[serde(rename = "date")]
    timestamp: DateTime<Utc>,
    weight: f64,
}

impl WeightSample {
    pub fn new(timestamp: DateTime<Utc>, weight: f64) -> Self {
        Self { timestamp, weight }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Month and day of the sample, e.g. `03-14`.
    pub fn short_date(&self) -> String {
        self.timestamp.format("%m-%d").to_string()
    }
}

/// Samples in insertion order, bounded to [`MAX_SAMPLES`].
#[derive(Clone)]
pub struct SampleSeries {
    samples: CircularBuffer<WeightSample>,
}

impl Default for SampleSeries {
    fn default() -> Self {
        Self {
            samples: CircularBuffer::new(MAX_SAMPLES),
        }
    }
}

impl SampleSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sample, evicting the oldest one by insertion order when full.
    pub fn push(&mut self, sample: WeightSample) -> Option<WeightSample> {
        self.samples.push(sample)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeightSample> {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&WeightSample> {
        self.samples.last()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn to_vec(&self) -> Vec<WeightSample> {
        self.samples.as_vec()
    }

    /// Smallest and largest weight, `None` when empty.
    pub fn weight_bounds(&self) -> Option<(f64, f64)> {
        self.iter().map(WeightSample::weight).fold(None, |acc, w| match acc {
            None => Some((w, w)),
            Some((lo, hi)) => Some((lo.min(w), hi.max(w))),
        })
    }
}

impl FromIterator<WeightSample> for SampleSeries {
    fn from_iter<I: IntoIterator<Item = WeightSample>>(iter: I) -> Self {
        let mut series = Self::default();
        for sample in iter {
            series.push(sample);
        }
        series
    }
}

impl PartialEq for SampleSeries {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl std::fmt::Debug for SampleSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.samples, f)
    }
}

impl Serialize for SampleSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for SampleSeries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let samples = Vec::<WeightSample>::deserialize(deserializer)?;
        Ok(samples.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(day: u32, weight: f64) -> WeightSample {
        WeightSample::new(Utc.with_ymd_and_hms(2024, 3, day, 8, 30, 0).unwrap(), weight)
    }

    #[test]
    fn test_json_shape() {
        let series: SampleSeries = [sample(1, 80.0), sample(2, 79.5)].into_iter().collect();
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(
            json,
            r#"[{"date":"2024-03-01T08:30:00Z","weight":80.0},{"date":"2024-03-02T08:30:00Z","weight":79.5}]"#
        );
    }

    #[test]
    fn test_reads_browser_timestamps() {
        let json = r#"[{"date":"2024-03-14T07:05:11.482Z","weight":81}]"#;
        let series: SampleSeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.latest().unwrap().weight(), 81.0);
        assert_eq!(series.latest().unwrap().short_date(), "03-14");
    }

    #[test]
    fn test_oversized_input_keeps_newest() {
        let series: SampleSeries = (1..=20).map(|d| sample(d, 60.0 + d as f64)).collect();
        assert_eq!(series.len(), MAX_SAMPLES);
        assert_eq!(series.iter().next().unwrap().weight(), 67.0);
        assert_eq!(series.latest().unwrap().weight(), 80.0);
    }

    #[test]
    fn test_weight_bounds() {
        assert_eq!(SampleSeries::new().weight_bounds(), None);
        let series: SampleSeries = [sample(1, 80.0), sample(2, 78.0), sample(3, 79.0)]
            .into_iter()
            .collect();
        assert_eq!(series.weight_bounds(), Some((78.0, 80.0)));
    }
}
