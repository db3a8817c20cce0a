pub mod store;

use std::fs;
use std::path::{Path, PathBuf};

pub use store::{FileStore, KeyValueStore, MemoryStore, StorageKey, StoreError};

/// Extensions the editor accepts when opening a file
pub const ACCEPTED_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

pub const MARKDOWN_MIME: &str = "text/markdown";

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Opening text files and handing finished documents back to the user
pub trait FileBridge {
    fn read_text(&self, path: &Path) -> Result<String, FileError>;

    /// Deliver `content` under `filename`; where it ends up is up to the bridge
    fn trigger_download(
        &mut self,
        filename: &str,
        content: &str,
        mime_type: &str,
    ) -> Result<(), FileError>;
}

/// File bridge over the local filesystem; downloads land in `download_dir`
#[derive(Debug, Clone)]
pub struct FsFileBridge {
    download_dir: PathBuf,
}

impl FsFileBridge {
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }
}

impl FileBridge for FsFileBridge {
    fn read_text(&self, path: &Path) -> Result<String, FileError> {
        read_file(path)
    }

    fn trigger_download(
        &mut self,
        filename: &str,
        content: &str,
        mime_type: &str,
    ) -> Result<(), FileError> {
        let path = self.download_dir.join(filename);
        log::info!("Writing {mime_type} download to {}", path.display());
        write_file(&path, content)
    }
}

/// Whether the editor will open a file with this name
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}

/// Read a markdown or text file and return its content
pub fn read_file(path: &Path) -> Result<String, FileError> {
    if !is_supported(path) {
        return Err(FileError::UnsupportedFormat(path.to_path_buf()));
    }
    if !path.exists() {
        return Err(FileError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), FileError> {
    let write_error = |source| FileError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    fs::write(path, content).map_err(write_error)
}
