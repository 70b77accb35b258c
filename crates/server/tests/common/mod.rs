//! # Common Test Utilities
//!
//! `TestApp` spawns the real router on a random port with the completion
//! endpoint pointed at an `httpmock::MockServer`, so each test drives the
//! server over HTTP exactly like a browser or API client would.

// Not every test file uses every helper.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use httpmock::{Method::POST, Mock, MockServer};
use reqwest::Client;
use rfpdraft_server::{config, router, state::build_app_state};
use serde_json::{json, Value};
use std::{fs::File, io::Write, net::SocketAddr};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

pub const CHAT_PATH: &str = "/v1/chat/completions";
pub const TEST_API_KEY: &str = "sk-test-key";

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    _config_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server and returns a `TestApp` instance.
    pub async fn spawn() -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();

        let config_dir = tempdir()?;
        let config_path = config_dir.path().join("config.yml");
        let config_content = format!(
            r#"
port: 0
ai:
  api_url: "{}"
  api_key: "{}"
"#,
            mock_server.url(CHAT_PATH),
            TEST_API_KEY
        );
        let mut file = File::create(&config_path)?;
        file.write_all(config_content.as_bytes())?;

        let config = config::get_config(Some(config_path.to_str().unwrap()))?;
        let app_state = build_app_state(config)?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            _config_dir: config_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Makes the completion endpoint answer with `content` as the message.
    pub fn mock_completion(&self, content: &str) -> Mock<'_> {
        self.mock_server.mock(|when, then| {
            when.method(POST)
                .path(CHAT_PATH)
                .header("authorization", format!("Bearer {TEST_API_KEY}"));
            then.status(200).json_body(json!({
                "choices": [{"message": {"role": "assistant", "content": content}}]
            }));
        })
    }

    /// Makes the completion endpoint fail with `status`.
    pub fn mock_completion_error(&self, status: u16, body: &str) -> Mock<'_> {
        self.mock_server.mock(|when, then| {
            when.method(POST).path(CHAT_PATH);
            then.status(status).body(body);
        })
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// A well-formed model answer with `items` question/answer pairs.
pub fn structured_answer(items: usize) -> String {
    let items: Vec<Value> = (1..=items)
        .map(|i| json!({"question": format!("Question {i}?"), "draft_answer": format!("Answer {i}.")}))
        .collect();
    json!({
        "summary": ["Managed hosting for the city portal", "Proposals due 1 March"],
        "items": items,
        "missing_info": ["Expected traffic volume"]
    })
    .to_string()
}
