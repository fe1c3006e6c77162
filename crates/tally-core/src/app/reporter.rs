//! StatusReporter - ライフサイクルイベントを集計し、レポートを書き直す
//!
//! 状態（results / order / errors）はこの構造体だけが所有・変更する。
//! ホストはイベントを 1 つずつ直列に渡し、各呼び出しは描画と
//! publish を終えてから戻る。

use std::collections::HashMap;
use std::fmt::Display;

use crate::domain::{Outcome, ReportError, Task, TaskName, TaskRecord, TaskResult, TaskStatus};
use crate::ports::{ArtifactStore, Clock, EventSink, HeaderSource};

use super::config::ReportConfig;
use super::render::{RenderInput, render_document};
use super::status::RunStatus;

/// Event sink that keeps an HTML status report current.
pub struct StatusReporter<S, H, C> {
    results: HashMap<TaskName, TaskResult>,

    /// Known tasks in declaration order; tasks first seen by `get_status` are appended.
    order: Vec<TaskName>,

    /// Run-level errors not tied to a task.
    errors: Vec<String>,

    store: S,
    header: H,
    clock: C,
    config: ReportConfig,
}

impl<S: ArtifactStore, H: HeaderSource, C: Clock> StatusReporter<S, H, C> {
    pub fn new(store: S, header: H, clock: C, config: ReportConfig) -> Self {
        Self {
            results: HashMap::new(),
            order: Vec::new(),
            errors: Vec::new(),
            store,
            header,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Derived status of a known task.
    pub fn status_of(&self, name: &str) -> Option<TaskStatus> {
        self.results.get(name).map(TaskResult::status)
    }

    /// Current bucket partition of all known tasks.
    pub fn run_status(&self) -> RunStatus {
        RunStatus::collect(&self.order, |name| {
            self.results
                .get(name)
                .map_or(TaskStatus::NotStarted, TaskResult::status)
        })
    }

    /// Snapshot records in declaration order.
    pub fn records(&self) -> Vec<TaskRecord> {
        self.order
            .iter()
            .filter_map(|name| self.results.get(name))
            .map(TaskResult::to_record)
            .collect()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Render the current state and replace the persisted report.
    pub fn update(&self) -> Result<(), ReportError> {
        let status = self.run_status();
        let header = self.header.header();
        let document = render_document(&RenderInput {
            header: header.as_deref(),
            status: &status,
            results: &self.results,
            errors: &self.errors,
            config: &self.config,
        })?;
        self.store.publish(&document)?;

        let counts = status.counts();
        tracing::debug!(
            total = counts.total(),
            running = counts.running,
            success = counts.success,
            fail = counts.fail,
            bytes = document.len(),
            "report updated"
        );
        Ok(())
    }

    /// Create an entry for `name` if absent. Returns true when one was created.
    fn register(&mut self, name: &TaskName) -> bool {
        if self.results.contains_key(name) {
            return false;
        }
        self.results
            .insert(name.clone(), TaskResult::new(name.clone()));
        self.order.push(name.clone());
        true
    }

    fn result_mut(&mut self, name: &TaskName) -> Result<&mut TaskResult, ReportError> {
        self.results
            .get_mut(name)
            .ok_or_else(|| ReportError::UnknownTask(name.clone()))
    }

    fn finish(
        &mut self,
        task: &Task,
        outcome: Outcome,
        error: Option<String>,
    ) -> Result<(), ReportError> {
        let now = self.clock.now();
        self.result_mut(&task.name)?
            .set_result(outcome, &task.actions, error, now)?;
        tracing::debug!(task = %task.name, status = %TaskStatus::from(outcome), "task finished");
        self.update()
    }
}

impl<S: ArtifactStore, H: HeaderSource, C: Clock> EventSink for StatusReporter<S, H, C> {
    fn initialize(&mut self, tasks: &[Task]) -> Result<(), ReportError> {
        let created = tasks.iter().filter(|t| self.register(&t.name)).count();
        tracing::debug!(tasks = tasks.len(), created, "reporter initialized");
        Ok(())
    }

    fn get_status(&mut self, task: &Task) -> Result<(), ReportError> {
        if self.register(&task.name) {
            tracing::debug!(task = %task.name, "registered task unknown at initialize");
        }
        Ok(())
    }

    fn execute_task(&mut self, task: &Task) -> Result<(), ReportError> {
        let now = self.clock.now();
        self.result_mut(&task.name)?.start(now)?;
        self.update()
    }

    fn add_failure(&mut self, task: &Task, failure: &dyn Display) -> Result<(), ReportError> {
        self.finish(task, Outcome::Fail, Some(failure.to_string()))
    }

    fn add_success(&mut self, task: &Task) -> Result<(), ReportError> {
        self.finish(task, Outcome::Success, None)
    }

    fn skip_uptodate(&mut self, task: &Task) -> Result<(), ReportError> {
        self.finish(task, Outcome::UpToDate, None)
    }

    fn skip_ignore(&mut self, task: &Task) -> Result<(), ReportError> {
        self.finish(task, Outcome::Ignore, None)
    }

    fn cleanup_error(&mut self, failure: &dyn Display) -> Result<(), ReportError> {
        let msg = failure.to_string();
        tracing::warn!(error = %msg, "cleanup error");
        self.errors.push(msg);
        Ok(())
    }

    fn runtime_error(&mut self, msg: &str) -> Result<(), ReportError> {
        tracing::warn!(error = %msg, "runtime error");
        self.errors.push(msg.to_owned());
        Ok(())
    }

    fn teardown_task(&mut self, task: &Task) -> Result<(), ReportError> {
        if !self.results.contains_key(&task.name) {
            return Err(ReportError::UnknownTask(task.name.clone()));
        }
        tracing::debug!(task = %task.name, "teardown");
        Ok(())
    }

    fn complete_run(&mut self) -> Result<(), ReportError> {
        self.update()?;
        let counts = self.run_status().counts();
        tracing::info!(
            total = counts.total(),
            up_to_date = counts.up_to_date,
            ignore = counts.ignore,
            success = counts.success,
            fail = counts.fail,
            errors = self.errors.len(),
            "run complete"
        );
        Ok(())
    }
}
