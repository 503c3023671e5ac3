#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::Value;
use tokio::net::TcpListener;

use swapi_favorites_api::app::{self, AppState};
use swapi_favorites_api::config::AppConfig;
use swapi_favorites_api::database::{MemoryStore, Store};

/// An API instance on its own port, backed by an empty in-memory store unless given one
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(Arc::new(MemoryStore::new())).await
    }

    /// Serve the given store instead of a fresh in-memory one
    pub async fn spawn_with(store: Arc<dyn Store>) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let listener = TcpListener::bind(("127.0.0.1", port))
            .await
            .with_context(|| format!("failed to bind port {}", port))?;

        let state = AppState::new(store);
        let api = AppConfig::development().api;
        tokio::spawn(async move {
            let _ = app::serve(listener, state, &api).await;
        });

        let server = Self {
            port,
            base_url: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
        };
        server.wait_ready(Duration::from_secs(5)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = self.client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> Result<(StatusCode, Value)> {
        let res = self.client.get(self.url(path)).send().await?;
        Ok((res.status(), res.json().await?))
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<(StatusCode, Value)> {
        let res = self.client.post(self.url(path)).json(&body).send().await?;
        Ok((res.status(), res.json().await?))
    }

    pub async fn post_empty(&self, path: &str) -> Result<(StatusCode, Value)> {
        let res = self.client.post(self.url(path)).send().await?;
        Ok((res.status(), res.json().await?))
    }

    pub async fn delete(&self, path: &str) -> Result<(StatusCode, Value)> {
        let res = self.client.delete(self.url(path)).send().await?;
        Ok((res.status(), res.json().await?))
    }

    /// Create a user and return its id
    pub async fn create_user(&self, email: &str) -> Result<i64> {
        let (status, body) = self
            .post("/users", serde_json::json!({ "email": email, "password": "secret123" }))
            .await?;
        anyhow::ensure!(status == StatusCode::CREATED, "create user failed: {} {}", status, body);
        body["id"].as_i64().context("user id missing")
    }

    /// Create a catalog record at `path` and return its id
    pub async fn create(&self, path: &str, body: Value) -> Result<i64> {
        let (status, body) = self.post(path, body).await?;
        anyhow::ensure!(status == StatusCode::CREATED, "create at {} failed: {} {}", path, status, body);
        body["id"].as_i64().context("record id missing")
    }
}
