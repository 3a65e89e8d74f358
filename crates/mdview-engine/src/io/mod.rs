use std::fs;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{path} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

/// UTF-8 byte order mark.
pub const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode raw file bytes into markdown text, dropping a leading BOM.
pub fn decode_markdown(mut bytes: Vec<u8>) -> Result<String, FromUtf8Error> {
    if bytes.starts_with(BOM) {
        bytes.drain(..BOM.len());
    }
    String::from_utf8(bytes)
}

/// Read a markdown file and return its content
pub fn read_markdown(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    decode_markdown(bytes).map_err(|source| IoError::InvalidUtf8 {
        path: path.to_path_buf(),
        source,
    })
}
