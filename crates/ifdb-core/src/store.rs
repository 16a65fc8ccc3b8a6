//! Persistent storage for downloaded files

use std::future::Future;
use std::path::Path;

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::{IfdbError, Result};

/// Durably writes downloaded bytes to a destination
pub trait Store {
    fn save(&self, bytes: &[u8], path: &Path) -> impl Future<Output = Result<()>>;
}

/// Writes files to the local file system
///
/// Missing parent directories are created. The file is flushed and synced
/// before `save` returns, and the handle is dropped on every path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl FsStore {
    async fn write(bytes: &[u8], path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::File::create(path).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        file.sync_all().await
    }
}

impl Store for FsStore {
    async fn save(&self, bytes: &[u8], path: &Path) -> Result<()> {
        debug!(path = %path.display(), len = bytes.len(), "writing file");

        Self::write(bytes, path)
            .await
            .map_err(|source| IfdbError::StoreError {
                path: path.to_path_buf(),
                source,
            })
    }
}
