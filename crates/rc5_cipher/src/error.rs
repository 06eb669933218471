use thiserror::Error;

/// Reasons a parameter, key or word handed to the cipher is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidParameter {
    /// Occurs when the word size is not one of 16, 32 or 64 bits.
    #[error("unsupported word size: {0} bits (expected 16, 32 or 64)")]
    UnsupportedWordSize(u32),

    /// Occurs when the table length `2(r + 1)` does not fit in `usize`.
    #[error("round count {0} needs a key table larger than this target can address")]
    TableTooLarge(u32),

    /// Occurs when the key buffer does not hold exactly `b` bytes.
    #[error("key length mismatch: expected {expected} bytes, got {actual}")]
    KeyLengthMismatch {
        /// Key length `b` the context was created with.
        expected: usize,
        /// Length of the key buffer that was supplied.
        actual: usize,
    },

    /// Occurs when a block word does not fit into the context's word size.
    #[error("word {value:#x} does not fit in {bits} bits")]
    WordOutOfRange {
        /// The offending word.
        value: u64,
        /// Word size of the context.
        bits: u32,
    },
}

/// Errors produced by the RC5 cipher core.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rc5Error {
    /// A creation parameter, key buffer or block word was rejected.
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] InvalidParameter),

    /// Occurs when encrypting or decrypting before any key was expanded.
    #[error("key schedule has not been expanded")]
    NotInitialized,

    /// Occurs when a byte block is not exactly two words long.
    #[error("block must be {expected} bytes, got {actual}")]
    InvalidBlockSize {
        /// Bytes per block for the context's word size.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}
