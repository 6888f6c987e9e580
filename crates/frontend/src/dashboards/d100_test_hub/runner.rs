//! Simulated test runner.
//!
//! Nothing is executed: after [`RUN_DELAY_MS`] a random result is published
//! for the requested kind.

use chrono::{Local, NaiveDateTime};
use contracts::dashboards::d100_test_hub::{TestKind, TestRunResult};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const RUN_DELAY_MS: u32 = 1500;

/// Maps `r` in `[0, 1)` onto `0..span`.
fn pick(r: f64, span: u32) -> u32 {
    let scaled = (r.clamp(0.0, 1.0) * span as f64).floor() as u32;
    scaled.min(span.saturating_sub(1))
}

/// Builds a result from a `[0, 1)` random source:
/// passed 8..=17, failed 0..=2, duration 5..=14 seconds.
pub fn sample_result(
    kind: TestKind,
    timestamp: NaiveDateTime,
    mut random: impl FnMut() -> f64,
) -> TestRunResult {
    TestRunResult {
        kind,
        passed: pick(random(), 10) + 8,
        failed: pick(random(), 3),
        duration_secs: pick(random(), 10) + 5,
        timestamp,
    }
}

/// Reactive runner state shared by the cards and the results panel.
#[derive(Clone, Copy)]
pub struct TestRunner {
    /// Kind whose run is pending, if any
    pub running: RwSignal<Option<TestKind>>,
    /// Last published result
    pub result: RwSignal<Option<TestRunResult>>,
    generation: StoredValue<u64>,
}

impl TestRunner {
    pub fn new() -> Self {
        Self {
            running: RwSignal::new(None),
            result: RwSignal::new(None),
            generation: StoredValue::new(0),
        }
    }

    /// Marks `kind` as running and returns the id of the new run.
    pub fn begin(&self, kind: TestKind) -> u64 {
        self.generation.update_value(|g| *g += 1);
        let run_id = self.generation.get_value();
        self.running.set(Some(kind));
        run_id
    }

    /// Publishes `result` if `run_id` is still the latest run.
    pub fn finish(&self, run_id: u64, result: TestRunResult) -> bool {
        // Dashboard gone or a newer run started
        if self.generation.try_get_value() != Some(run_id) {
            log::debug!("test run #{} superseded", run_id);
            return false;
        }
        log::info!(
            "test run #{} finished: {} passed={} failed={} duration={}s",
            run_id,
            result.kind.as_str(),
            result.passed,
            result.failed,
            result.duration_secs
        );
        self.result.set(Some(result));
        self.running.set(None);
        true
    }

    /// Starts a run; a newer run supersedes any pending one.
    pub fn run(&self, kind: TestKind) {
        let run_id = self.begin(kind);
        log::info!("test run #{} started: {}", run_id, kind.as_str());

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(RUN_DELAY_MS).await;
            let result = sample_result(kind, Local::now().naive_local(), js_sys::Math::random);
            this.finish(run_id, result);
        });
    }

    pub fn is_running(&self, kind: TestKind) -> bool {
        self.running.get() == Some(kind)
    }

    pub fn dismiss(&self) {
        self.result.set(None);
    }
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 6)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_lowest_sample() {
        let result = sample_result(TestKind::Unit, ts(), || 0.0);
        assert_eq!((result.passed, result.failed, result.duration_secs), (8, 0, 5));
        assert_eq!(result.kind, TestKind::Unit);
        assert_eq!(result.timestamp, ts());
    }

    #[test]
    fn test_highest_sample() {
        let result = sample_result(TestKind::Api, ts(), || 0.999_999);
        assert_eq!((result.passed, result.failed, result.duration_secs), (17, 2, 14));
    }

    #[test]
    fn test_out_of_range_source_is_clamped() {
        let result = sample_result(TestKind::Ui, ts(), || 1.0);
        assert_eq!((result.passed, result.failed, result.duration_secs), (17, 2, 14));
        let result = sample_result(TestKind::Ui, ts(), || -0.5);
        assert_eq!((result.passed, result.failed, result.duration_secs), (8, 0, 5));
    }

    #[test]
    fn test_only_latest_run_publishes() {
        Owner::new().with(|| {
            let runner = TestRunner::new();
            let first = runner.begin(TestKind::Unit);
            let second = runner.begin(TestKind::Api);
            assert_eq!((first, second), (1, 2));

            let stale = sample_result(TestKind::Unit, ts(), || 0.0);
            assert!(!runner.finish(first, stale));
            assert_eq!(runner.result.get_untracked(), None);
            assert_eq!(runner.running.get_untracked(), Some(TestKind::Api));

            let latest = sample_result(TestKind::Api, ts(), || 0.5);
            assert!(runner.finish(second, latest.clone()));
            assert_eq!(runner.result.get_untracked(), Some(latest));
            assert_eq!(runner.running.get_untracked(), None);
        });
    }

    #[test]
    fn test_dismiss_clears_result() {
        Owner::new().with(|| {
            let runner = TestRunner::new();
            let run_id = runner.begin(TestKind::Form);
            runner.finish(run_id, sample_result(TestKind::Form, ts(), || 0.0));
            runner.dismiss();
            assert_eq!(runner.result.get_untracked(), None);
        });
    }

    #[test]
    fn test_draw_order() {
        let mut draws = [0.55, 0.4, 0.1].into_iter();
        let result = sample_result(TestKind::Form, ts(), move || draws.next().unwrap());
        assert_eq!((result.passed, result.failed, result.duration_secs), (13, 1, 6));
    }
}
