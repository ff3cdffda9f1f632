use crate::core::{ClientUser, ExecutorUser, UserSource};
use crate::utils::error::{ReportError, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Reads both datasets from JSON files on disk.
#[derive(Debug, Clone)]
pub struct FileUserSource {
    clients_path: PathBuf,
    executor_path: PathBuf,
}

impl FileUserSource {
    pub fn new(clients_path: impl Into<PathBuf>, executor_path: impl Into<PathBuf>) -> Self {
        Self {
            clients_path: clients_path.into(),
            executor_path: executor_path.into(),
        }
    }

    /// Uses `clients.json` and `executor.json` inside `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join("clients.json"), dir.join("executor.json"))
    }

    async fn read_json<T: DeserializeOwned>(resource: &str, path: &Path) -> Result<T> {
        let fail = |cause: String| {
            ReportError::Fetch(format!(
                "Failed to read {} from {}: {}",
                resource,
                path.display(),
                cause
            ))
        };

        tracing::debug!("Reading {} from {}", resource, path.display());
        let data = tokio::fs::read(path).await.map_err(|e| fail(e.to_string()))?;
        serde_json::from_slice(&data).map_err(|e| fail(e.to_string()))
    }
}

#[async_trait::async_trait]
impl UserSource for FileUserSource {
    async fn fetch_clients(&self) -> Result<Vec<ClientUser>> {
        Self::read_json("clients", &self.clients_path).await
    }

    async fn fetch_executor(&self) -> Result<ExecutorUser> {
        Self::read_json("executor", &self.executor_path).await
    }
}
