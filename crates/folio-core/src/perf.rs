//! Optional per-widget layout timing, keyed by debug label.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

/// Label used for widgets that carry no debug label of their own.
pub const UNLABELED: &str = "<unlabeled>";

/// Aggregated timing for one debug label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerfSample {
    /// Number of layout calls recorded
    pub count: u64,
    /// Total time spent across those calls
    pub total: Duration,
}

/// Collects layout timings per debug label.
///
/// Interior mutability keeps recording out of the layout signatures; a
/// sampler belongs to exactly one pipeline instance and is not shared
/// across threads.
#[derive(Debug, Default)]
pub struct PerfSampler {
    samples: RefCell<HashMap<String, PerfSample>>,
}

impl PerfSampler {
    /// Create a new empty sampler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one layout call for a label.
    pub fn record(&self, label: &str, elapsed: Duration) {
        let mut samples = self.samples.borrow_mut();
        let sample = samples.entry(label.to_string()).or_default();
        sample.count += 1;
        sample.total += elapsed;
    }

    /// Snapshot of all samples.
    #[must_use]
    pub fn samples(&self) -> HashMap<String, PerfSample> {
        self.samples.borrow().clone()
    }

    /// Sample for one label, if any calls were recorded.
    #[must_use]
    pub fn sample(&self, label: &str) -> Option<PerfSample> {
        self.samples.borrow().get(label).copied()
    }

    /// Discard all samples.
    pub fn clear(&self) {
        self.samples.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates() {
        let sampler = PerfSampler::new();
        sampler.record("text", Duration::from_micros(10));
        sampler.record("text", Duration::from_micros(5));
        sampler.record("row", Duration::from_micros(1));

        let text = sampler.sample("text").unwrap();
        assert_eq!(text.count, 2);
        assert_eq!(text.total, Duration::from_micros(15));
        assert_eq!(sampler.samples().len(), 2);
    }

    #[test]
    fn test_clear() {
        let sampler = PerfSampler::new();
        sampler.record("x", Duration::from_micros(1));
        sampler.clear();
        assert!(sampler.samples().is_empty());
    }
}
