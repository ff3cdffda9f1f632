use crate::domain::model::{ClientUser, ExecutorUser, SortMode};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Where the two datasets come from.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_clients(&self) -> Result<Vec<ClientUser>>;
    async fn fetch_executor(&self) -> Result<ExecutorUser>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceSpec {
    Http { clients_url: String, executor_url: String },
    File { clients_path: PathBuf, executor_path: PathBuf },
    /// `clients.json` and `executor.json` inside one directory.
    DataDir(PathBuf),
}

pub trait ConfigProvider: Send + Sync {
    fn sort_mode(&self) -> Result<SortMode>;
    fn source(&self) -> SourceSpec;
}
