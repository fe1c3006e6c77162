//! tally-core
//!
//! Live task status aggregation and HTML report rendering.
//!
//! ホスト（タスク実行エンジン）から届くライフサイクルイベントを集計し、
//! 実行中いつ読んでも一貫した HTML レポートをディスク上に保つ。
//!
//! # モジュール構成
//! - **domain**: TaskName, TaskStatus, TaskResult, ReportError
//! - **ports**: EventSink, ArtifactStore, HeaderSource, Clock
//! - **app**: StatusReporter, ReporterBuilder, render, config
//! - **impls**: ファイル / メモリ実装

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{ReportConfig, ReporterBuilder, StatusReporter};
pub use domain::{ActionOutput, ReportError, Task, TaskName, TaskStatus};
pub use ports::EventSink;
