//! Per-task result accumulator.
//!
//! TaskResult は 1 タスク分の実行ライフサイクル（開始・終了時刻、
//! 出力、終了ステータス）を蓄積する。I/O は持たず、時刻も呼び出し側から渡す。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ActionOutput, Outcome, ReportError, TaskName, TaskStatus};

/// Separator placed between the outputs of consecutive actions.
pub const ACTION_SEPARATOR: &str = "\n<hr>\n";

const STARTED_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Lifecycle accumulator for one task.
///
/// Status is derived from the timestamps and the outcome rather than stored:
/// - no start and no outcome: NotStarted
/// - started, no outcome: Running
/// - otherwise: the outcome
#[derive(Debug, Clone)]
pub struct TaskResult {
    name: TaskName,
    outcome: Option<Outcome>,

    /// Non-empty stdout of each action, in action order. `None` until finished.
    out: Option<Vec<String>>,

    /// Non-empty stderr of each action, in action order. `None` until finished.
    err: Option<Vec<String>>,

    /// Diagnostic attached on failure.
    error: Option<String>,

    started_on: Option<DateTime<Utc>>,
    finished_on: Option<DateTime<Utc>>,
}

impl TaskResult {
    pub fn new(name: TaskName) -> Self {
        Self {
            name,
            outcome: None,
            out: None,
            err: None,
            error: None,
            started_on: None,
            finished_on: None,
        }
    }

    pub fn name(&self) -> &TaskName {
        &self.name
    }

    /// Record the start of execution.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), ReportError> {
        let from = self.status();
        if from != TaskStatus::NotStarted {
            return Err(self.invalid(from, TaskStatus::Running));
        }
        self.started_on = Some(now);
        Ok(())
    }

    /// Record the terminal result and collect the output of `actions`.
    pub fn set_result(
        &mut self,
        outcome: Outcome,
        actions: &[ActionOutput],
        error: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(), ReportError> {
        let from = self.status();
        let to = TaskStatus::from(outcome);
        if from.is_terminal() || (outcome == Outcome::Success && from == TaskStatus::NotStarted) {
            return Err(self.invalid(from, to));
        }

        self.finished_on = Some(now);
        self.outcome = Some(outcome);
        self.out = Some(non_empty(actions.iter().map(|a| a.out.as_str())));
        self.err = Some(non_empty(actions.iter().map(|a| a.err.as_str())));
        self.error = error;
        Ok(())
    }

    pub fn status(&self) -> TaskStatus {
        match (self.outcome, self.started_on) {
            (Some(outcome), _) => outcome.into(),
            (None, None) => TaskStatus::NotStarted,
            (None, Some(_)) => TaskStatus::Running,
        }
    }

    /// Per-action stdout segments (empty until the task finished).
    pub fn out_segments(&self) -> &[String] {
        self.out.as_deref().unwrap_or_default()
    }

    pub fn err_segments(&self) -> &[String] {
        self.err.as_deref().unwrap_or_default()
    }

    /// Joined stdout of all actions.
    pub fn out(&self) -> String {
        self.out_segments().join(ACTION_SEPARATOR)
    }

    /// Joined stderr of all actions.
    pub fn err(&self) -> String {
        self.err_segments().join(ACTION_SEPARATOR)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn started_on(&self) -> Option<DateTime<Utc>> {
        self.started_on
    }

    /// Seconds between start and finish, once both are known.
    pub fn elapsed(&self) -> Option<f64> {
        let (start, finish) = (self.started_on?, self.finished_on?);
        Some((finish - start).num_microseconds()? as f64 / 1_000_000.0)
    }

    /// Formatted start timestamp (UTC).
    pub fn started(&self) -> Option<String> {
        self.started_on
            .map(|t| t.format(STARTED_FORMAT).to_string())
    }

    /// Snapshot of this result.
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            name: self.name.clone(),
            status: self.status(),
            out: self.out(),
            err: self.err(),
            error: self.error.clone(),
            started: self.started(),
            elapsed: self.elapsed(),
        }
    }

    fn invalid(&self, from: TaskStatus, to: TaskStatus) -> ReportError {
        ReportError::InvalidTransition {
            task: self.name.clone(),
            from,
            to,
        }
    }
}

fn non_empty<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts.filter(|s| !s.is_empty()).map(str::to_owned).collect()
}

/// Serializable snapshot of a `TaskResult`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub name: TaskName,
    pub status: TaskStatus,
    pub out: String,
    pub err: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rstest::rstest;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn result() -> TaskResult {
        TaskResult::new(TaskName::new("compile"))
    }

    #[test]
    fn new_result_is_not_started() {
        let r = result();
        assert_eq!(r.status(), TaskStatus::NotStarted);
        assert_eq!(r.started(), None);
        assert_eq!(r.elapsed(), None);
        assert_eq!(r.out(), "");
        assert_eq!(r.err(), "");
    }

    #[test]
    fn start_then_success() {
        let mut r = result();
        r.start(t0()).unwrap();
        assert_eq!(r.status(), TaskStatus::Running);
        assert_eq!(r.elapsed(), None);

        r.set_result(Outcome::Success, &[], None, t0() + Duration::milliseconds(1500))
            .unwrap();
        assert_eq!(r.status(), TaskStatus::Success);
        assert_eq!(r.elapsed(), Some(1.5));
        assert_eq!(r.error(), None);
    }

    #[test]
    fn start_twice_is_rejected() {
        let mut r = result();
        r.start(t0()).unwrap();
        let err = r.start(t0() + Duration::seconds(1)).unwrap_err();
        assert!(matches!(
            err,
            ReportError::InvalidTransition {
                from: TaskStatus::Running,
                to: TaskStatus::Running,
                ..
            }
        ));
        // started_on は最初の値のまま
        assert_eq!(r.started_on(), Some(t0()));
    }

    #[test]
    fn start_after_finish_is_rejected() {
        let mut r = result();
        r.set_result(Outcome::UpToDate, &[], None, t0()).unwrap();
        assert!(r.start(t0()).is_err());
        assert_eq!(r.status(), TaskStatus::UpToDate);
    }

    #[test]
    fn success_without_start_is_rejected() {
        let mut r = result();
        let err = r.set_result(Outcome::Success, &[], None, t0()).unwrap_err();
        assert!(matches!(
            err,
            ReportError::InvalidTransition {
                from: TaskStatus::NotStarted,
                to: TaskStatus::Success,
                ..
            }
        ));
        assert_eq!(r.status(), TaskStatus::NotStarted);
    }

    #[rstest]
    #[case::up_to_date(Outcome::UpToDate)]
    #[case::ignore(Outcome::Ignore)]
    #[case::fail(Outcome::Fail)]
    fn skips_and_failures_may_arrive_without_start(#[case] outcome: Outcome) {
        let mut r = result();
        r.set_result(outcome, &[], None, t0()).unwrap();
        assert_eq!(r.status(), TaskStatus::from(outcome));
        // 開始していないので経過時間はない
        assert_eq!(r.elapsed(), None);
        assert_eq!(r.started(), None);
    }

    #[test]
    fn terminal_result_cannot_be_overwritten() {
        let mut r = result();
        r.start(t0()).unwrap();
        r.set_result(Outcome::Fail, &[], Some("exit 1".into()), t0())
            .unwrap();
        assert!(r.set_result(Outcome::Success, &[], None, t0()).is_err());
        assert_eq!(r.status(), TaskStatus::Fail);
        assert_eq!(r.error(), Some("exit 1"));
    }

    #[test]
    fn outputs_of_actions_are_joined_with_separator() {
        let actions = vec![
            ActionOutput::new("first", ""),
            ActionOutput::new("", "warn"),
            ActionOutput::new("second", "boom"),
        ];
        let mut r = result();
        r.start(t0()).unwrap();
        r.set_result(Outcome::Success, &actions, None, t0()).unwrap();

        assert_eq!(r.out(), "first\n<hr>\nsecond");
        assert_eq!(r.err(), "warn\n<hr>\nboom");
        assert_eq!(r.out_segments(), ["first", "second"]);
    }

    #[test]
    fn record_is_idempotent() {
        let mut r = result();
        r.start(t0()).unwrap();
        r.set_result(Outcome::Fail, &[ActionOutput::new("o", "e")], Some("exit 1".into()), t0() + Duration::seconds(2))
            .unwrap();

        let a = r.to_record();
        let b = r.to_record();
        assert_eq!(a, b);
        assert_eq!(a.status, TaskStatus::Fail);
        assert_eq!(a.started.as_deref(), Some("2024-01-01 12:00:00.000000"));
        assert_eq!(a.elapsed, Some(2.0));
        assert_eq!(a.error.as_deref(), Some("exit 1"));
    }

    #[test]
    fn record_of_untouched_task_omits_optional_fields() {
        let v = serde_json::to_value(result().to_record()).unwrap();
        assert_eq!(v["name"], "compile");
        assert_eq!(v["status"], "not_started");
        assert_eq!(v["out"], "");
        assert!(v.get("started").is_none());
        assert!(v.get("elapsed").is_none());
        assert!(v.get("error").is_none());
    }
}
