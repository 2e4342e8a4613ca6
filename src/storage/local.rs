//! Local filesystem seen-set storage.

use std::ffi::OsString;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::SeenSet;
use crate::storage::{SeenStore, parse_lines, render_lines};

/// Seen set kept in a flat UTF-8 text file.
#[derive(Debug, Clone)]
pub struct FileSeenStore {
    path: PathBuf,
}

impl FileSeenStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Temporary sibling used for atomic writes: `{file name}.tmp`.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.ensure_dir().await?;

        let tmp = self.tmp_path();
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl SeenStore for FileSeenStore {
    async fn load(&self) -> Result<SeenSet> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(parse_lines(&content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No seen file at {}, starting empty", self.path.display());
                Ok(SeenSet::new())
            }
            Err(e) => Err(AppError::Io(e)),
        }
    }

    async fn save(&self, seen: &SeenSet) -> Result<()> {
        self.write_bytes(render_lines(seen).as_bytes()).await?;
        log::info!("Saved {} identifiers to {}", seen.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
