// Adapters layer: concrete data sources behind `UserSource`.

pub mod file;
pub mod http;

use crate::core::engine::ReportEngine;
use crate::core::{SortMode, SourceSpec};

pub use file::FileUserSource;
pub use http::HttpUserSource;

/// Build the source described by `spec` and render the report through it.
pub async fn render_report(spec: &SourceSpec, sort: SortMode) -> String {
    match spec {
        SourceSpec::Http {
            clients_url,
            executor_url,
        } => {
            tracing::info!("Fetching clients from {} and executor from {}", clients_url, executor_url);
            ReportEngine::new(HttpUserSource::new(clients_url, executor_url))
                .render(sort)
                .await
        }
        SourceSpec::File {
            clients_path,
            executor_path,
        } => {
            tracing::info!(
                "Reading clients from {} and executor from {}",
                clients_path.display(),
                executor_path.display()
            );
            ReportEngine::new(FileUserSource::new(clients_path, executor_path))
                .render(sort)
                .await
        }
        SourceSpec::DataDir(dir) => {
            tracing::info!("Reading clients and executor from {}", dir.display());
            ReportEngine::new(FileUserSource::from_dir(dir))
                .render(sort)
                .await
        }
    }
}
