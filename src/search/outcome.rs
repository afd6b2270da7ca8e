//! Execution outcome: the accumulator mutated across both phases.

use chrono::{DateTime, TimeDelta, Utc};

use crate::search::transport::RawResponse;

/// Phases of one `execute()` call.
///
/// `Errored` is terminal and reachable from either in-flight phase. The
/// mode flip `ResolvingKeys` → `FetchingHits` happens exactly once and
/// never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorPhase {
    /// Not started.
    Idle,
    /// Aggregations phase: resolving the matching key set.
    ResolvingKeys,
    /// Hits phase: fetching full records for the page.
    FetchingHits,
    /// Both phases completed.
    Done,
    /// A phase failed; execution halted gracefully.
    Errored,
}

/// Accumulator owned by the executor for the lifetime of one `execute()`
/// call, read-only to the caller afterwards.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    keys: Vec<String>,
    total: u64,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
    elapsed: TimeDelta,
    phase: ExecutorPhase,
    errored: bool,
    failure: Option<String>,
    raw_result: Option<RawResponse>,
}

impl SearchOutcome {
    /// Start a new outcome, recording the start time.
    pub(crate) fn begin() -> Self {
        SearchOutcome {
            keys: Vec::new(),
            total: 0,
            started_at: Utc::now(),
            finished_at: None,
            elapsed: TimeDelta::zero(),
            phase: ExecutorPhase::Idle,
            errored: false,
            failure: None,
            raw_result: None,
        }
    }

    pub(crate) fn enter_phase(&mut self, phase: ExecutorPhase) {
        self.phase = phase;
    }

    pub(crate) fn record_keys(&mut self, keys: Vec<String>) {
        self.total = keys.len() as u64;
        self.keys = keys;
    }

    pub(crate) fn record_result(&mut self, response: RawResponse) {
        self.raw_result = Some(response);
    }

    pub(crate) fn record_failure(&mut self, message: String) {
        self.errored = true;
        self.failure = Some(message);
        self.phase = ExecutorPhase::Errored;
    }

    /// Record the end time and settle the terminal phase.
    pub(crate) fn finish(&mut self) {
        let finished = Utc::now();
        self.finished_at = Some(finished);
        self.elapsed = finished - self.started_at;
        if self.phase != ExecutorPhase::Errored {
            self.phase = ExecutorPhase::Done;
        }
    }

    /// Ordered document keys resolved by the aggregations phase.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Total match count.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// When execution started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When execution finished, if it has.
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Wall-clock duration of the whole execution.
    pub fn elapsed(&self) -> TimeDelta {
        self.elapsed
    }

    /// Terminal phase of the state machine.
    pub fn phase(&self) -> ExecutorPhase {
        self.phase
    }

    /// True when either phase failed.
    pub fn errored(&self) -> bool {
        self.errored
    }

    /// Description of the failure, when one occurred.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// The hits-phase payload, absent on error.
    pub fn raw_result(&self) -> Option<&RawResponse> {
        self.raw_result.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_begin_is_clean() {
        let outcome = SearchOutcome::begin();

        assert_eq!(outcome.phase(), ExecutorPhase::Idle);
        assert!(outcome.keys().is_empty());
        assert_eq!(outcome.total(), 0);
        assert!(!outcome.errored());
        assert!(outcome.raw_result().is_none());
        assert!(outcome.finished_at().is_none());
    }

    #[test]
    fn test_record_keys_sets_total() {
        let mut outcome = SearchOutcome::begin();
        outcome.record_keys(vec!["2_1".to_string(), "2_2".to_string()]);

        assert_eq!(outcome.total(), 2);
        assert_eq!(outcome.keys(), &["2_1", "2_2"]);
    }

    #[test]
    fn test_failure_is_terminal() {
        let mut outcome = SearchOutcome::begin();
        outcome.enter_phase(ExecutorPhase::ResolvingKeys);
        outcome.record_failure("connection refused".to_string());
        outcome.finish();

        assert!(outcome.errored());
        assert_eq!(outcome.phase(), ExecutorPhase::Errored);
        assert_eq!(outcome.failure(), Some("connection refused"));
    }

    #[test]
    fn test_finish_settles_done_and_elapsed() {
        let mut outcome = SearchOutcome::begin();
        outcome.enter_phase(ExecutorPhase::FetchingHits);
        outcome.record_result(RawResponse::from(json!({"hits": {}})));
        outcome.finish();

        assert_eq!(outcome.phase(), ExecutorPhase::Done);
        assert!(outcome.finished_at().is_some());
        assert!(outcome.elapsed() >= TimeDelta::zero());
    }
}
