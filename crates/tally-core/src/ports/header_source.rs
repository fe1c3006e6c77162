//! HeaderSource port - 利用者が用意するドキュメントヘッダー

/// Provider of an optional user-supplied document header.
///
/// `None` means "use the built-in header"; a missing template is not an error.
pub trait HeaderSource {
    fn header(&self) -> Option<String>;
}

/// Always falls back to the built-in header.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHeader;

impl HeaderSource for NoHeader {
    fn header(&self) -> Option<String> {
        None
    }
}
