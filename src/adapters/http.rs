use crate::core::{ClientUser, ExecutorUser, UserSource};
use crate::utils::error::{ReportError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Fetches both datasets as JSON over HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    clients_url: String,
    executor_url: String,
    client: Client,
}

impl HttpUserSource {
    pub fn new(clients_url: impl Into<String>, executor_url: impl Into<String>) -> Self {
        Self {
            clients_url: clients_url.into(),
            executor_url: executor_url.into(),
            client: Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: &str, url: &str) -> Result<T> {
        let fail = |cause: String| {
            ReportError::Fetch(format!("Failed to fetch {} from {}: {}", resource, url, cause))
        };

        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fail(e.to_string()))?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(fail(format!("HTTP {}", response.status())));
        }

        response.json::<T>().await.map_err(|e| fail(e.to_string()))
    }
}

#[async_trait::async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_clients(&self) -> Result<Vec<ClientUser>> {
        self.get_json("clients", &self.clients_url).await
    }

    async fn fetch_executor(&self) -> Result<ExecutorUser> {
        self.get_json("executor", &self.executor_url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_clients_successful_response() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/clients");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!([
                        {"name": "A", "position": {"x": 0, "y": 0}, "reward": 5},
                        {"name": "B", "position": {"x": 3, "y": 4}, "reward": 10, "demands": ["X"]}
                    ]));
            })
            .await;

        let source = HttpUserSource::new(server.url("/clients"), server.url("/executor"));
        let clients = source.fetch_clients().await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].demands, None);
        assert_eq!(clients[1].demands, Some(vec!["X".to_string()]));
    }

    #[tokio::test]
    async fn test_fetch_executor_successful_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/executor");
                then.status(200).json_body(serde_json::json!({
                    "position": {"x": 1.5, "y": -2},
                    "possibilities": ["X", "Y"]
                }));
            })
            .await;

        let source = HttpUserSource::new(server.url("/clients"), server.url("/executor"));
        let executor = source.fetch_executor().await.unwrap();

        assert_eq!(executor.position.x, 1.5);
        assert_eq!(executor.possibilities, vec!["X", "Y"]);
    }

    #[tokio::test]
    async fn test_server_error_is_fetch_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/clients");
                then.status(500);
            })
            .await;

        let url = server.url("/clients");
        let source = HttpUserSource::new(url.clone(), server.url("/executor"));
        let err = source.fetch_clients().await.unwrap_err();

        match err {
            ReportError::Fetch(message) => {
                assert!(message.starts_with(&format!("Failed to fetch clients from {}", url)));
                assert!(message.contains("HTTP 500"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_fetch_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/executor");
                then.status(200).json_body(serde_json::json!({"possibilities": "nope"}));
            })
            .await;

        let source = HttpUserSource::new(server.url("/clients"), server.url("/executor"));
        let err = source.fetch_executor().await.unwrap_err();

        assert!(matches!(err, ReportError::Fetch(ref m) if m.starts_with("Failed to fetch executor")));
    }
}
