//! Compiler error types.

use thiserror::Error;

/// Errors that can occur when compiling a textual command into a frame.
///
/// All errors are detected before any frame bytes are committed, so a
/// failed compilation never leaves a partial frame behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Empty or whitespace-only command text, or an unusable output buffer.
    #[error("invalid input: empty command or output buffer")]
    InvalidInput,

    /// First token does not name a known `CFG-` command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// VALSET key does not name a known configuration item.
    #[error("unknown configuration key: {0}")]
    UnknownConfigKey(String),

    /// Wrong number of tokens for a command with a fixed arity.
    #[error("invalid argument count: expected {expected} tokens, got {actual}")]
    InvalidArgumentCount {
        /// Required token count.
        expected: usize,
        /// Token count received.
        actual: usize,
    },
}
