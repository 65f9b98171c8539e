//! Scanner configuration.

use std::num::NonZeroUsize;

/// Tuning knobs for [`Scanner`](crate::lexer::lexer::Scanner).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Longest lexeme kept in full. Bytes past the limit are consumed but not
    /// stored. `None` keeps everything. Zero is not allowed, so an unknown
    /// byte always keeps its one byte of text.
    pub max_lexeme_len: Option<NonZeroUsize>,
}

impl ScannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_lexeme_len(mut self, limit: NonZeroUsize) -> Self {
        self.max_lexeme_len = Some(limit);
        self
    }
}
