//! Error types for building, encoding and decoding Huffman codes.

use thiserror::Error;

/// Everything that can go wrong inside the coder. None of these are transient:
/// they are either caller contract violations or corrupt input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HuffmanError {
    /// No symbols to build a tree from.
    #[error("cannot build a Huffman tree from empty input")]
    EmptyInput,

    /// Invalid argument, e.g. a zero frequency count or a non-binary digit.
    #[error("invalid argument: {0}")]
    Argument(String),

    /// The symbol has no code in the mapping used for encoding.
    #[error("symbol {0} has no code in the mapping")]
    UnknownSymbol(String),

    /// The bit-string ran out before reaching a leaf, or cannot be walked.
    #[error("malformed encoding: stopped after {consumed} of {len} bits")]
    MalformedEncoding { consumed: usize, len: usize },
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
