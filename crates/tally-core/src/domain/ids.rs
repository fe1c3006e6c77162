//! Domain identifiers.
//!
//! タスクの同一性は名前（文字列）で表現されるが、`&str` のまま持ち回すと
//! 任意の文字列とタスク名が混同できてしまう。`TaskName` で包むことで、
//! results マップのキーとして使う値を型で区別する。

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identity of a task within one run (the aggregation key).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskName(String);

impl TaskName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for TaskName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TaskName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for TaskName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn task_name_serializes_as_plain_string() {
        let name = TaskName::new("build:docs");
        let s = serde_json::to_string(&name).unwrap();
        assert_eq!(s, "\"build:docs\"");

        let back: TaskName = serde_json::from_str(&s).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(TaskName::new("a"), 1);

        // Borrow<str> のおかげで &str で引ける
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), None);
    }
}
