use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write raw bytes to a file, creating parent directories as needed
    pub fn write_bytes<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Detect whether a file is a plain-text transcript.
    ///
    /// The extension is checked first: a `.txt` file is accepted when its
    /// content holds up as text, any other extension is rejected outright.
    /// Files without an extension fall back to content sniffing.
    pub fn detect_file_type<P: AsRef<Path>>(path: P) -> Result<FileType> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(anyhow::anyhow!("File does not exist: {:?}", path));
        }

        match path.extension() {
            Some(ext) => {
                if !ext.to_string_lossy().eq_ignore_ascii_case("txt") {
                    return Ok(FileType::Other);
                }
            },
            None => {},
        }

        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read file: {:?}", path))?;
        if Self::looks_like_text(&bytes) {
            Ok(FileType::PlainText)
        } else {
            Ok(FileType::Other)
        }
    }

    // NUL bytes or invalid UTF-8 mark the content as binary
    fn looks_like_text(bytes: &[u8]) -> bool {
        if bytes.contains(&0) {
            return false;
        }
        std::str::from_utf8(bytes).is_ok()
    }
}

/// Enum representing accepted input file types
#[derive(Debug, PartialEq, Eq)]
pub enum FileType {
    /// Plain-text transcript
    PlainText,
    /// Anything else; rejected at intake
    Other,
}
