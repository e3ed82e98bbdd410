//! Reading and writing compressed files.
//!
//! The compressed file holds exactly the codec output. The frequency table
//! is written next to it as a codebook, since the compressed format does not
//! carry one, and decompression rebuilds the code table from it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::compression::huffman::HuffmanCodec;
use crate::compression::Compression;
use crate::config::FileConfig;
use crate::error::Result;

/// What [`compress_file`] wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressReport {
    pub compressed_path: PathBuf,
    pub codebook_path: PathBuf,
    /// Size of the text actually compressed, in bytes
    pub input_bytes: usize,
    /// Size of the compressed file, in bytes
    pub output_bytes: usize,
}

impl CompressReport {
    /// Compressed size over input size.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.output_bytes as f64 / self.input_bytes as f64
    }
}

/// Compress the text file at `input`.
///
/// # Errors
///
/// I/O failures, a file that is not UTF-8, a text that is empty after
/// trimming ([`Error::EmptyInput`](crate::Error::EmptyInput)), or an output
/// path that would overwrite `input` (an `InvalidInput` I/O error).
pub fn compress_file(input: &Path, config: &FileConfig) -> Result<CompressReport> {
    let compressed_path = config.compressed_path(input);
    let codebook_path = config.codebook_path(&compressed_path);
    ensure_not_input(input, &compressed_path)?;
    ensure_not_input(input, &codebook_path)?;

    let raw = fs::read_to_string(input)?;
    let text = if config.trim_trailing_whitespace {
        let trimmed = raw.trim_end();
        if trimmed.len() != raw.len() {
            warn!(
                "{}: dropping {} bytes of trailing whitespace",
                input.display(),
                raw.len() - trimmed.len()
            );
        }
        trimmed
    } else {
        raw.as_str()
    };

    let codec = HuffmanCodec::from_text(text)?;
    let encoded = codec.compress(text)?;

    // The codebook goes first so a compressed file never exists without one.
    fs::write(&codebook_path, codec.codebook())?;
    if let Err(e) = fs::write(&compressed_path, &encoded) {
        if let Err(cleanup) = fs::remove_file(&codebook_path) {
            warn!(
                "{}: could not remove codebook after failed write: {}",
                codebook_path.display(),
                cleanup
            );
        }
        return Err(e.into());
    }

    let report = CompressReport {
        compressed_path,
        codebook_path,
        input_bytes: text.len(),
        output_bytes: encoded.len(),
    };
    info!(
        "compressed {} ({} bytes) to {} ({} bytes, {:.1}%)",
        input.display(),
        report.input_bytes,
        report.compressed_path.display(),
        report.output_bytes,
        report.ratio() * 100.0
    );
    Ok(report)
}

/// Decompress the file at `input` using its sibling codebook, returning the
/// path of the restored text.
pub fn decompress_file(input: &Path, config: &FileConfig) -> Result<PathBuf> {
    let codebook_path = config.codebook_path(input);
    let output_path = config.decompressed_path(input);
    ensure_not_input(input, &codebook_path)?;
    ensure_not_input(input, &output_path)?;

    let encoded = fs::read(input)?;
    let codebook = fs::read(&codebook_path)?;

    let codec = HuffmanCodec::from_codebook(&codebook)?;
    let text = codec.decompress(&encoded)?;

    fs::write(&output_path, &text)?;
    info!(
        "decompressed {} to {} ({} bytes)",
        input.display(),
        output_path.display(),
        text.len()
    );
    Ok(output_path)
}

/// Reject a derived path that names the file being read.
fn ensure_not_input(input: &Path, derived: &Path) -> Result<()> {
    if derived == input {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "{} would overwrite its own input; change the file name or extensions",
                input.display()
            ),
        )
        .into());
    }
    Ok(())
}
