use crate::core::report::show;
use crate::core::{Report, SortMode, UserSource};
use crate::utils::error::Result;

pub struct ReportEngine<S: UserSource> {
    source: S,
}

impl<S: UserSource> ReportEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch clients and executor concurrently, then format.
    ///
    /// Both fetches always run to completion. A client failure wins over an
    /// executor failure, and the formatter only runs when both succeeded.
    pub async fn run(&self, sort: SortMode) -> Result<Report> {
        let (clients, executor) =
            tokio::join!(self.source.fetch_clients(), self.source.fetch_executor());

        let clients = clients?;
        let executor = executor?;
        tracing::debug!(
            "Fetched {} clients and executor with {} possibilities",
            clients.len(),
            executor.possibilities.len()
        );

        let report = show(sort, &clients, &executor)?;
        tracing::info!("Executor meets {} of {} clients", report.met, report.total);
        Ok(report)
    }

    /// Like [`run`](Self::run), but collapses failures into their message.
    pub async fn render(&self, sort: SortMode) -> String {
        match self.run(sort).await {
            Ok(report) => report.text,
            Err(e) => {
                tracing::warn!("Report not produced: {}", e);
                e.to_string()
            }
        }
    }
}
