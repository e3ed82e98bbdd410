//! # huffpack
//!
//! Lossless text compression with Huffman codes.
//!
//! A code table is built from the symbol frequencies of the text, the text
//! is encoded against it, and the bits are packed into bytes behind a
//! one-byte header recording how many padding bits end the stream.
//!
//! ```rust
//! use huffpack::HuffmanCodec;
//!
//! let codec = HuffmanCodec::from_text("mississippi").unwrap();
//! let bytes = codec.encode("mississippi").unwrap();
//! assert_eq!(codec.decode(&bytes).unwrap(), "mississippi");
//! ```

pub mod compression;
pub mod config;
pub mod error;
pub mod file;

pub use compression::huffman::{huffman_decode, huffman_encode, CodeTable, HuffmanCodec};
pub use config::FileConfig;
pub use error::{Error, Result};
pub use file::{compress_file, decompress_file, CompressReport};
