//! Status - タスクをステータスごとのバケットに分ける
//!
//! 描画のたびに、既知の全タスクを 6 つのバケットに振り分ける。
//! バケットの並びは固定（TaskStatus::BUCKET_ORDER）、バケット内は宣言順。

use serde::{Deserialize, Serialize};

use crate::domain::{TaskName, TaskStatus};

/// Partition of the known tasks by derived status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStatus {
    buckets: Vec<(TaskStatus, Vec<TaskName>)>,
}

impl RunStatus {
    /// Bucket `order` by the status `status_of` reports for each task.
    pub fn collect<'a>(
        order: impl IntoIterator<Item = &'a TaskName>,
        status_of: impl Fn(&TaskName) -> TaskStatus,
    ) -> Self {
        let mut buckets: Vec<(TaskStatus, Vec<TaskName>)> = TaskStatus::BUCKET_ORDER
            .iter()
            .map(|&status| (status, Vec::new()))
            .collect();

        for name in order {
            let status = status_of(name);
            if let Some((_, names)) = buckets.iter_mut().find(|(s, _)| *s == status) {
                names.push(name.clone());
            }
        }
        Self { buckets }
    }

    /// Buckets in display order (all six, possibly empty).
    pub fn buckets(&self) -> impl Iterator<Item = (TaskStatus, &[TaskName])> {
        self.buckets
            .iter()
            .map(|(status, names)| (*status, names.as_slice()))
    }

    pub fn bucket(&self, status: TaskStatus) -> &[TaskName] {
        self.buckets()
            .find(|(s, _)| *s == status)
            .map(|(_, names)| names)
            .unwrap_or_default()
    }

    /// Every task in bucket traversal order.
    pub fn tasks(&self) -> impl Iterator<Item = (TaskStatus, &TaskName)> {
        self.buckets
            .iter()
            .flat_map(|(status, names)| names.iter().map(move |name| (*status, name)))
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(|(_, names)| names.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts {
            up_to_date: self.bucket(TaskStatus::UpToDate).len(),
            ignore: self.bucket(TaskStatus::Ignore).len(),
            success: self.bucket(TaskStatus::Success).len(),
            fail: self.bucket(TaskStatus::Fail).len(),
            running: self.bucket(TaskStatus::Running).len(),
            not_started: self.bucket(TaskStatus::NotStarted).len(),
        }
    }
}

/// Number of tasks per status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub up_to_date: usize,
    pub ignore: usize,
    pub success: usize,
    pub fail: usize,
    pub running: usize,
    pub not_started: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.up_to_date + self.ignore + self.success + self.fail + self.running + self.not_started
    }
}
