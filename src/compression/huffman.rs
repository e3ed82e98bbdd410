//! Huffman coding over the characters of a text.
//!
//! Compression runs text → [`FrequencyTable`] → [`HuffmanTree`] →
//! [`CodeTable`] → bytes. The output does not carry the table: decoding
//! needs the same [`CodeTable`], either retained from compression or rebuilt
//! from the persisted [`FrequencyTable`], which always yields the same tree.
//!
//! The compressed format is one header byte holding the number of padding
//! bits `p` (0–7), followed by the codes packed most significant bit first,
//! with the last `p` bits of the final byte set to zero.

mod code_table;
mod decoder;
mod encoder;
mod frequency;
mod tree;

pub use code_table::{Code, CodeTable, ReverseMapping};
pub use decoder::decode;
pub use encoder::{encode, encode_bits, padding_for};
pub use frequency::FrequencyTable;
pub use tree::{HuffmanNode, HuffmanTree};

use crate::compression::Compression;
use crate::error::Result;

/// A code table together with the statistics it was built from.
///
/// Holds no per-call state, so one codec can serve any number of encode and
/// decode calls, from any thread.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    frequencies: FrequencyTable,
    code_table: CodeTable,
    reverse: ReverseMapping,
}

impl HuffmanCodec {
    /// Build a codec from the symbol statistics of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`](crate::Error::EmptyInput) for an empty
    /// text.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_frequencies(FrequencyTable::from_text(text))
    }

    /// Build a codec from previously counted statistics.
    ///
    /// Deterministic: the same table always yields the same codes, which is
    /// what lets a decompressor rebuild the codec from a persisted codebook.
    pub fn from_frequencies(frequencies: FrequencyTable) -> Result<Self> {
        let tree = HuffmanTree::build(&frequencies)?;
        let code_table = CodeTable::from_tree(&tree)?;
        let reverse = code_table.reverse();
        Ok(HuffmanCodec {
            frequencies,
            code_table,
            reverse,
        })
    }

    /// Rebuild a codec from a codebook written by [`HuffmanCodec::codebook`].
    pub fn from_codebook(bytes: &[u8]) -> Result<Self> {
        Self::from_frequencies(FrequencyTable::from_bytes(bytes)?)
    }

    /// The frequency table serialized for out-of-band storage.
    pub fn codebook(&self) -> Vec<u8> {
        self.frequencies.to_bytes()
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.code_table
    }

    pub fn reverse_mapping(&self) -> &ReverseMapping {
        &self.reverse
    }

    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        encode(text, &self.code_table)
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        decode(bytes, &self.reverse)
    }
}

impl Compression for HuffmanCodec {
    fn compress(&self, text: &str) -> Result<Vec<u8>> {
        self.encode(text)
    }

    fn decompress(&self, data: &[u8]) -> Result<String> {
        self.decode(data)
    }
}

/// Convenience function: builds the code table from `input`, encodes the
/// input, and returns (encoded bytes, code table).
pub fn huffman_encode(input: &str) -> Result<(Vec<u8>, CodeTable)> {
    let freq_table = FrequencyTable::from_text(input);
    let tree = HuffmanTree::build(&freq_table)?;
    let code_table = CodeTable::from_tree(&tree)?;
    let encoded = encode(input, &code_table)?;
    Ok((encoded, code_table))
}

/// Convenience function: decodes bytes using the provided code table.
pub fn huffman_decode(encoded: &[u8], code_table: &CodeTable) -> Result<String> {
    decode(encoded, &code_table.reverse())
}
