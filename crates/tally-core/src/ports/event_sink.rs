//! EventSink port - ホストから届くライフサイクルイベント
//!
//! タスク実行エンジン（ホスト）は、タスクの選択・実行・終了のたびに
//! このトレイトのメソッドを直列に呼び出す。各呼び出しは描画まで含めて
//! 完了してから戻る。

use std::fmt::Display;

use crate::domain::{ReportError, Task};

/// Receiver of the host's lifecycle notifications.
///
/// Only `initialize` and `get_status` may register new tasks; every other
/// per-task call on an unregistered task is `ReportError::UnknownTask`.
pub trait EventSink {
    /// Called once tasks are loaded, before execution starts.
    fn initialize(&mut self, tasks: &[Task]) -> Result<(), ReportError>;

    /// Called when a task is selected (the host checks whether it is up to date).
    fn get_status(&mut self, task: &Task) -> Result<(), ReportError>;

    /// Called when execution of a task starts.
    fn execute_task(&mut self, task: &Task) -> Result<(), ReportError>;

    /// Task finished with a failure.
    fn add_failure(&mut self, task: &Task, failure: &dyn Display) -> Result<(), ReportError>;

    /// Task finished successfully.
    fn add_success(&mut self, task: &Task) -> Result<(), ReportError>;

    /// Task skipped because it is up to date.
    fn skip_uptodate(&mut self, task: &Task) -> Result<(), ReportError>;

    /// Task skipped because it is ignored.
    fn skip_ignore(&mut self, task: &Task) -> Result<(), ReportError>;

    /// Error raised during cleanup, not tied to a task.
    fn cleanup_error(&mut self, failure: &dyn Display) -> Result<(), ReportError>;

    /// Error from the host itself (not from a task execution).
    fn runtime_error(&mut self, msg: &str) -> Result<(), ReportError>;

    /// Teardown of a task starts.
    fn teardown_task(&mut self, _task: &Task) -> Result<(), ReportError> {
        Ok(())
    }

    /// All tasks are done.
    fn complete_run(&mut self) -> Result<(), ReportError>;
}
