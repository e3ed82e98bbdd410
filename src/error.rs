//! Error types shared by every stage of the codec.

use thiserror::Error;

/// Result type for all huffpack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a compress or decompress call.
///
/// None of these are recoverable within the call: Huffman coding has no
/// notion of partial success, so the whole buffer either round-trips or the
/// operation fails with one of these kinds.
#[derive(Debug, Error)]
pub enum Error {
    /// A tree cannot be built from an empty frequency table.
    #[error("cannot build a Huffman tree from empty input")]
    EmptyInput,

    /// The encoder met a symbol the code table has no entry for.
    #[error("symbol {0:?} has no code in the code table")]
    UnknownSymbol(char),

    /// The byte stream is not a valid product of this encoder and table.
    #[error("corrupt stream: {0}")]
    CorruptStream(String),

    /// An internal invariant of the tree or code table was broken.
    #[error("structural invariant violated: {0}")]
    StructuralInvariantViolation(String),

    /// A persisted codebook could not be parsed.
    #[error("invalid codebook: {0}")]
    InvalidCodebook(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
