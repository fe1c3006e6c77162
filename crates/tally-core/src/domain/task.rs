use serde::{Deserialize, Serialize};

use super::TaskName;

/// Output captured from one action of a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutput {
    /// Captured stdout.
    pub out: String,

    /// Captured stderr.
    pub err: String,
}

impl ActionOutput {
    pub fn new(out: impl Into<String>, err: impl Into<String>) -> Self {
        Self {
            out: out.into(),
            err: err.into(),
        }
    }
}

/// A task as the host describes it: its name plus the actions executed so far.
///
/// ホスト（タスク実行エンジン）が各ライフサイクル呼び出しで渡すもの。
/// スケジューリングや依存関係はホスト側の責務なので、ここには持たない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: TaskName,

    #[serde(default)]
    pub actions: Vec<ActionOutput>,
}

impl Task {
    pub fn new(name: impl Into<TaskName>) -> Self {
        Self {
            name: name.into(),
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: ActionOutput) -> Self {
        self.actions.push(action);
        self
    }

    pub fn name(&self) -> &TaskName {
        &self.name
    }
}
