use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Failure reported by the host with its own message.
    #[error("{0}")]
    Storage(String),
    #[error("storage path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("failed to clear {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    Reload,
}

/// Primitives the options page borrows from the extension host.
#[async_trait]
pub trait HostRuntime: Send + Sync {
    async fn clear_storage(&self) -> Result<(), HostError>;

    /// Restarts the page. Nothing after this call is expected to be observed.
    fn reload(&self);
}

/// Host backed by a storage directory on disk. Reloads are delivered to the UI
/// loop through the receiver returned by [`LocalExtensionHost::new`].
pub struct LocalExtensionHost {
    storage_dir: PathBuf,
    signals: Sender<HostSignal>,
}

impl LocalExtensionHost {
    pub fn new(storage_dir: PathBuf) -> (Self, Receiver<HostSignal>) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                storage_dir,
                signals: tx,
            },
            rx,
        )
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }
}

fn io_error(path: &Path, source: io::Error) -> HostError {
    HostError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Empties `root` but keeps the directory itself. Returns how many entries
/// were removed.
fn clear_dir(root: &Path) -> Result<usize, HostError> {
    let metadata = match std::fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(source) => return Err(io_error(root, source)),
    };
    if !metadata.is_dir() {
        return Err(HostError::NotADirectory(root.to_path_buf()));
    }

    let mut removed = 0_usize;
    for entry in std::fs::read_dir(root).map_err(|source| io_error(root, source))? {
        let entry = entry.map_err(|source| io_error(root, source))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|source| io_error(&path, source))?;
        let result = if file_type.is_dir() {
            std::fs::remove_dir_all(&path)
        } else {
            std::fs::remove_file(&path)
        };
        result.map_err(|source| io_error(&path, source))?;
        removed += 1;
    }
    Ok(removed)
}

#[async_trait]
impl HostRuntime for LocalExtensionHost {
    /// The removal runs as one blocking job, so it completes even if the
    /// awaiting flow is dropped part way, e.g. by runtime shutdown on quit.
    async fn clear_storage(&self) -> Result<(), HostError> {
        let root = self.storage_dir.clone();
        let job = tokio::task::spawn_blocking(move || clear_dir(&root));
        let removed = job
            .await
            .map_err(|error| HostError::Storage(format!("storage clear interrupted: {error}")))??;
        tracing::info!(dir = %self.storage_dir.display(), removed, "extension storage cleared");
        Ok(())
    }

    fn reload(&self) {
        tracing::info!("page reload requested");
        if self.signals.send(HostSignal::Reload).is_err() {
            tracing::warn!("reload requested with no page listening");
        }
    }
}
