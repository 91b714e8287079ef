use crate::models::Sample;
use crate::log_debug;

const ENABLE_LOGS: bool = true;

/// Holds the currently loaded series, sorted by timestamp.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    samples: Vec<Sample>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current series with `samples` sorted by timestamp.
    /// `sort_by_key` is stable, so equal timestamps keep their input order.
    pub fn load(&mut self, mut samples: Vec<Sample>) {
        samples.sort_by_key(|sample| sample.timestamp);
        log_debug!("Loaded series with {} samples", samples.len());
        self.samples = samples;
    }

    /// The active series; empty if nothing has been loaded.
    pub fn current(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn empty_until_loaded() {
        let store = SeriesStore::new();
        assert!(store.current().is_empty());
    }

    #[test]
    fn load_sorts_and_keeps_tie_order() {
        let mut store = SeriesStore::new();
        store.load(vec![
            Sample::new(at(30), 3.0),
            Sample::new(at(10), 1.0),
            Sample::new(at(20), 2.0),
            Sample::new(at(10), 1.5),
        ]);

        let values: Vec<f64> = store.current().iter().map(|s| s.value).collect();
        assert_eq!(values, vec![1.0, 1.5, 2.0, 3.0]);
        assert!(store
            .current()
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp));
    }

    #[test]
    fn load_replaces_previous_series() {
        let mut store = SeriesStore::new();
        store.load(vec![Sample::new(at(1), 1.0), Sample::new(at(2), 2.0)]);
        store.load(vec![Sample::new(at(5), 9.0)]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.current()[0].value, 9.0);
    }
}
