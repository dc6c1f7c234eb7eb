//! Timing statistics for render sweeps.
//!
//! The collectors are owned by the driver and passed around explicitly;
//! nothing in here is global state.

use std::time::Duration;

use log::info;

/// Per-scene timings of one full sweep.
#[derive(Debug, Default)]
pub struct RunStats {
    scene_times: Vec<Duration>,
}

impl RunStats {
    pub fn record(&mut self, elapsed: Duration) {
        self.scene_times.push(elapsed);
    }

    pub fn len(&self) -> usize {
        self.scene_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scene_times.is_empty()
    }

    pub fn total(&self) -> Duration {
        self.scene_times.iter().sum()
    }

    pub fn mean(&self) -> Duration {
        if self.scene_times.is_empty() {
            return Duration::ZERO;
        }
        self.total() / self.scene_times.len() as u32
    }

    pub fn std_dev(&self) -> Duration {
        if self.scene_times.is_empty() {
            return Duration::ZERO;
        }

        let mean = self.mean().as_secs_f64();
        let variance = self
            .scene_times
            .iter()
            .map(|t| {
                let d = t.as_secs_f64() - mean;
                d * d
            })
            .sum::<f64>()
            / self.scene_times.len() as f64;

        Duration::from_secs_f64(variance.sqrt())
    }

    pub fn min(&self) -> Duration {
        self.scene_times.iter().min().copied().unwrap_or(Duration::ZERO)
    }

    pub fn max(&self) -> Duration {
        self.scene_times.iter().max().copied().unwrap_or(Duration::ZERO)
    }

    pub fn log_summary(&self) {
        info!("mean scene time: {:?}", self.mean());
        info!("std dev of scene times: {:?}", self.std_dev());
        info!("max scene time: {:?}", self.max());
        info!("min scene time: {:?}", self.min());
    }
}

/// Timings across every run of one invocation.
#[derive(Debug, Default)]
pub struct SweepStats {
    runs: Vec<RunStats>,
}

impl SweepStats {
    pub fn push_run(&mut self, run: RunStats) {
        self.runs.push(run);
    }

    pub fn runs(&self) -> &[RunStats] {
        &self.runs
    }

    pub fn log_summary(&self) {
        let mut totals = RunStats::default();
        for run in &self.runs {
            totals.record(run.total());
        }

        info!("mean run time: {:?}", totals.mean());
        info!("std dev of run times: {:?}", totals.std_dev());
        info!("max run time: {:?}", totals.max());
        info!("min run time: {:?}", totals.min());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mean_and_extremes() {
        let mut stats = RunStats::default();
        stats.record(Duration::from_millis(10));
        stats.record(Duration::from_millis(20));
        stats.record(Duration::from_millis(30));

        assert_eq!(stats.len(), 3);
        assert_eq!(stats.total(), Duration::from_millis(60));
        assert_eq!(stats.mean(), Duration::from_millis(20));
        assert_eq!(stats.min(), Duration::from_millis(10));
        assert_eq!(stats.max(), Duration::from_millis(30));
    }

    #[test]
    fn std_dev_of_constant_times_is_zero() {
        let mut stats = RunStats::default();
        for _ in 0..5 {
            stats.record(Duration::from_millis(7));
        }
        assert!(stats.std_dev().as_secs_f64() < 1e-9);
    }

    #[test]
    fn std_dev_known_value() {
        let mut stats = RunStats::default();
        stats.record(Duration::from_secs(2));
        stats.record(Duration::from_secs(4));

        // population std dev of {2, 4} is 1
        assert!((stats.std_dev().as_secs_f64() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_stats_are_zero() {
        let stats = RunStats::default();
        assert!(stats.is_empty());
        assert_eq!(stats.mean(), Duration::ZERO);
        assert_eq!(stats.std_dev(), Duration::ZERO);
    }
}
