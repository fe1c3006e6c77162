//! ArtifactStore port - 描画済みドキュメントの置き場
//!
//! 読み手（ブラウザの自動リロードなど）は任意のタイミングでファイルを読む。
//! publish は「前の完全な版」か「新しい完全な版」のどちらかしか
//! 見えないように置き換えなければならない。

use crate::domain::ReportError;

/// Destination of the rendered report.
pub trait ArtifactStore {
    /// Replace the persisted document with `document` in one step.
    fn publish(&self, document: &str) -> Result<(), ReportError>;
}
