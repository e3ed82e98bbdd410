//! Compression algorithms implementation.
//!
//! This module provides a lossless text compressor built on Huffman coding:
//! - Frequency analysis of the input symbols
//! - Greedy minimum-weight tree construction with deterministic tie-breaking
//! - Prefix-free code table derivation
//! - Bit packing behind a one-byte padding header
//!
//! # Examples
//!
//! ```rust
//! use huffpack::compression::huffman::{huffman_decode, huffman_encode};
//!
//! let (bytes, table) = huffman_encode("abracadabra").unwrap();
//! assert_eq!(huffman_decode(&bytes, &table).unwrap(), "abracadabra");
//! ```

pub use crate::error::{Error, Result};

/// Trait for text compression algorithms
pub trait Compression {
    /// Compress the input text
    fn compress(&self, text: &str) -> Result<Vec<u8>>;

    /// Decompress the compressed data back into text
    fn decompress(&self, data: &[u8]) -> Result<String>;
}

pub mod huffman;
pub use huffman::{
    decode, encode, encode_bits, huffman_decode, huffman_encode, padding_for, Code, CodeTable,
    FrequencyTable, HuffmanCodec, HuffmanNode, HuffmanTree, ReverseMapping,
};
