//! Errors - エラー型
//!
//! タスク実行の失敗はエラーではなく TaskResult に記録される。
//! ここに並ぶのは reporter 自身の不整合と、描画・書き込みの失敗だけ。

use thiserror::Error;

use super::{TaskName, TaskStatus};

#[derive(Debug, Error)]
pub enum ReportError {
    /// A lifecycle call named a task that neither `initialize` nor `get_status` registered.
    #[error("unknown task: {0}")]
    UnknownTask(TaskName),

    #[error("invalid transition for task {task}: {from} -> {to}")]
    InvalidTransition {
        task: TaskName,
        from: TaskStatus,
        to: TaskStatus,
    },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to render report")]
    Render(#[from] std::fmt::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to replace report: {0}")]
    Persist(#[from] tempfile::PersistError),
}
