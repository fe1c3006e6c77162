//! App - アプリケーション層
//!
//! ports を組み合わせて reporter を実装する。
//!
//! # 主要コンポーネント
//! - **StatusReporter**: ライフサイクルイベントの集計と再描画
//! - **ReporterBuilder**: 構築とワイヤリング
//! - **RunStatus**: ステータスごとのバケット分け
//! - **render**: HTML ドキュメントの生成
//! - **ReportConfig**: 出力先・ヘッダーの設定

pub mod builder;
pub mod config;
pub mod render;
pub mod reporter;
pub mod status;

pub use self::builder::ReporterBuilder;
pub use self::config::ReportConfig;
pub use self::render::{escape_html, unescape_html};
pub use self::reporter::StatusReporter;
pub use self::status::{RunStatus, StatusCounts};
