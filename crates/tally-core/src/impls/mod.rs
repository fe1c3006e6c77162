//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **FileArtifactStore**: 一時ファイル + rename でレポートを置き換える
//! - **MemoryArtifactStore**: 書き込まれたドキュメントをメモリに残す（テスト・埋め込み用）
//! - **FileHeaderSource**: ヘッダーテンプレートをファイルから読む

pub mod file_header;
pub mod file_store;
pub mod memory_store;

pub use self::file_header::FileHeaderSource;
pub use self::file_store::FileArtifactStore;
pub use self::memory_store::MemoryArtifactStore;
