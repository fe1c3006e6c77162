//! Domain model (task identity, status, per-task result, errors).
//!
//! I/O を持たない純粋なデータと状態遷移だけを置く。

pub mod errors;
pub mod ids;
pub mod result;
pub mod state;
pub mod task;

pub use self::errors::ReportError;
pub use self::ids::TaskName;
pub use self::result::{ACTION_SEPARATOR, TaskRecord, TaskResult};
pub use self::state::{Outcome, TaskStatus};
pub use self::task::{ActionOutput, Task};
