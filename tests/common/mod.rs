use std::net::SocketAddr;
use std::path::PathBuf;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use formrelay::config::{Config, SmtpConfig};
use formrelay::store::SubmissionStore;

/// A running test server instance with a dedicated temp data file.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub data_file: PathBuf,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a contact payload, return (body, status).
    pub async fn submit(&self, payload: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/contact"))
            .json(payload)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET the full submission list, return (body, status).
    pub async fn list(&self) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url("/api/submissions"))
            .send()
            .await
            .expect("list request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// A payload with all four required fields.
    pub fn valid_payload(name: &str) -> Value {
        json!({
            "name": name,
            "email": format!("{}@test.com", name.to_lowercase()),
            "subject": "Test subject",
            "message": "Test message body",
        })
    }
}

/// Spawn a test app on a random port with a fresh temp data file. SMTP points
/// at a closed local port, so every delivery attempt fails fast and
/// `email_sent` is always false in tests.
pub async fn spawn_app() -> TestApp {
    let data_file = std::env::temp_dir().join(format!(
        "formrelay_test_{}.json",
        Uuid::now_v7().to_string().replace('-', "")
    ));

    let config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to a random port
        data_file: data_file.clone(),
        log_level: "warn".to_string(),
        smtp: SmtpConfig {
            server: "127.0.0.1".to_string(),
            port: 1, // nothing listens here
            sender: "sender@test.com".to_string(),
            password: "password".to_string(),
            recipient: "recipient@test.com".to_string(),
        },
    };

    let store = SubmissionStore::new(data_file.clone());
    let app = formrelay::build_app(store, config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::new();

    TestApp {
        addr,
        client,
        data_file,
    }
}

/// Remove the temp data file after tests complete.
pub async fn cleanup(app: TestApp) {
    let _ = tokio::fs::remove_file(&app.data_file).await;
}
