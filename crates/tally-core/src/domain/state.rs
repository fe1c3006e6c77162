//! Task status and its presentation attributes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a task as shown in the report.
///
/// State transitions:
/// - NotStarted -> Running -> Success | Fail
/// - NotStarted -> UpToDate | Ignore | Fail (host skipped or failed it without running)
///
/// UpToDate / Ignore / Success / Fail are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    NotStarted,
    Running,
    UpToDate,
    Ignore,
    Success,
    Fail,
}

impl TaskStatus {
    /// Bucket order of the progress strip and the status table.
    pub const BUCKET_ORDER: [TaskStatus; 6] = [
        TaskStatus::UpToDate,
        TaskStatus::Ignore,
        TaskStatus::Success,
        TaskStatus::Fail,
        TaskStatus::Running,
        TaskStatus::NotStarted,
    ];

    /// Is this a terminal state (no further transitions)?
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TaskStatus::UpToDate | TaskStatus::Ignore | TaskStatus::Success | TaskStatus::Fail
        )
    }

    /// Name used in the document, also the CSS class of rows and progress spans.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "not_started",
            TaskStatus::Running => "running",
            TaskStatus::UpToDate => "up_to_date",
            TaskStatus::Ignore => "ignore",
            TaskStatus::Success => "success",
            TaskStatus::Fail => "fail",
        }
    }

    /// One-character symbol in the progress strip.
    pub fn glyph(self) -> char {
        match self {
            TaskStatus::UpToDate => 'U',
            TaskStatus::Ignore => '_',
            TaskStatus::Success => '#',
            TaskStatus::Fail => '!',
            TaskStatus::Running => 'R',
            TaskStatus::NotStarted => '.',
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal result handed to `TaskResult::set_result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    UpToDate,
    Ignore,
    Success,
    Fail,
}

impl From<Outcome> for TaskStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::UpToDate => TaskStatus::UpToDate,
            Outcome::Ignore => TaskStatus::Ignore,
            Outcome::Success => TaskStatus::Success,
            Outcome::Fail => TaskStatus::Fail,
        }
    }
}
