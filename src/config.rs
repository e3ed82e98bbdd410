//! Settings for the file-level compress and decompress helpers.

use std::path::{Path, PathBuf};

/// Output naming and input preparation for [`crate::file`].
///
/// The defaults turn `notes.txt` into `notes.bin` plus the codebook
/// `notes.codes`, and `notes.bin` back into `notes_decompressed.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    /// Extension of the compressed file
    pub compressed_extension: String,
    /// Extension of the sidecar file holding the frequency table
    pub codebook_extension: String,
    /// Appended to the file stem of a decompressed file
    pub decompressed_suffix: String,
    /// Extension of the decompressed file
    pub decompressed_extension: String,
    /// Strip trailing whitespace from the text before compressing
    pub trim_trailing_whitespace: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        FileConfig {
            compressed_extension: "bin".to_string(),
            codebook_extension: "codes".to_string(),
            decompressed_suffix: "_decompressed".to_string(),
            decompressed_extension: "txt".to_string(),
            trim_trailing_whitespace: true,
        }
    }
}

impl FileConfig {
    pub fn with_compressed_extension(mut self, extension: impl Into<String>) -> Self {
        self.compressed_extension = extension.into();
        self
    }

    pub fn with_codebook_extension(mut self, extension: impl Into<String>) -> Self {
        self.codebook_extension = extension.into();
        self
    }

    pub fn with_decompressed_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.decompressed_suffix = suffix.into();
        self
    }

    pub fn with_decompressed_extension(mut self, extension: impl Into<String>) -> Self {
        self.decompressed_extension = extension.into();
        self
    }

    pub fn with_trim_trailing_whitespace(mut self, trim: bool) -> Self {
        self.trim_trailing_whitespace = trim;
        self
    }

    /// Where the compressed form of `input` is written.
    pub fn compressed_path(&self, input: &Path) -> PathBuf {
        input.with_extension(&self.compressed_extension)
    }

    /// Where the codebook for the compressed file `compressed` lives.
    pub fn codebook_path(&self, compressed: &Path) -> PathBuf {
        compressed.with_extension(&self.codebook_extension)
    }

    /// Where the decompressed form of `compressed` is written.
    pub fn decompressed_path(&self, compressed: &Path) -> PathBuf {
        let stem = compressed
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut name = format!("{}{}", stem, self.decompressed_suffix);
        if !self.decompressed_extension.is_empty() {
            name.push('.');
            name.push_str(&self.decompressed_extension);
        }
        compressed.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = FileConfig::default();
        let input = Path::new("data/notes.txt");
        let compressed = config.compressed_path(input);
        assert_eq!(compressed, PathBuf::from("data/notes.bin"));
        assert_eq!(
            config.codebook_path(&compressed),
            PathBuf::from("data/notes.codes")
        );
        assert_eq!(
            config.decompressed_path(&compressed),
            PathBuf::from("data/notes_decompressed.txt")
        );
    }

    #[test]
    fn test_builder() {
        let config = FileConfig::default()
            .with_compressed_extension("huff")
            .with_codebook_extension("tbl")
            .with_decompressed_suffix(".out")
            .with_decompressed_extension("")
            .with_trim_trailing_whitespace(false);
        assert!(!config.trim_trailing_whitespace);

        let compressed = config.compressed_path(Path::new("a.txt"));
        assert_eq!(compressed, PathBuf::from("a.huff"));
        assert_eq!(config.codebook_path(&compressed), PathBuf::from("a.tbl"));
        assert_eq!(config.decompressed_path(&compressed), PathBuf::from("a.out"));
    }
}
