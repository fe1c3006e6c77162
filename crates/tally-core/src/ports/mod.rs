//! Ports - 抽象化レイヤー
//!
//! reporter が外部と接する境界を trait として定義する。
//! - EventSink: ホストからのライフサイクル通知（inbound）
//! - ArtifactStore: 描画結果の永続化（outbound）
//! - HeaderSource: 任意のヘッダーテンプレート（optional inbound）
//! - Clock: 時刻

pub mod artifact_store;
pub mod clock;
pub mod event_sink;
pub mod header_source;

pub use self::artifact_store::ArtifactStore;
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::EventSink;
pub use self::header_source::{HeaderSource, NoHeader};
