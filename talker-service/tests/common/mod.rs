#![allow(dead_code)]

use serde_json::{json, Value};
use service_core::config::Config as CoreConfig;
use std::path::PathBuf;
use talker_service::config::TalkerConfig;
use talker_service::startup::Application;
use talker_service::AppState;
use uuid::Uuid;

pub const VALID_TOKEN: &str = "a1b2c3d4e5f6a7b8";

pub fn seed_talkers() -> Value {
    json!([
        {
            "id": 1,
            "name": "Henrique Albuquerque",
            "age": 62,
            "talk": { "watchedAt": "23/10/2020", "rate": 5 }
        },
        {
            "id": 2,
            "name": "Heloísa Albuquerque",
            "age": 67,
            "talk": { "watchedAt": "23/10/2020", "rate": 5 }
        },
        {
            "id": 3,
            "name": "Ricardo Xavier Filho",
            "age": 33,
            "talk": { "watchedAt": "23/10/2020", "rate": 5 }
        }
    ])
}

pub fn valid_talker_body() -> Value {
    json!({
        "name": "Danielle Santos",
        "age": 56,
        "talk": { "watchedAt": "22/10/2019", "rate": 5 }
    })
}

/// A per-test data file under `target/`, removed on drop.
pub struct TestDataFile {
    pub path: PathBuf,
}

impl TestDataFile {
    pub fn new(contents: &str) -> Self {
        let dir = PathBuf::from("target/test-data");
        std::fs::create_dir_all(&dir).expect("Failed to create test data dir");
        let path = dir.join(format!("talker-{}.json", Uuid::new_v4()));
        std::fs::write(&path, contents).expect("Failed to write test data file");
        Self { path }
    }

    pub fn with_talkers(talkers: &Value) -> Self {
        Self::new(&serde_json::to_string_pretty(talkers).unwrap())
    }

    pub fn read_json(&self) -> Value {
        let raw = std::fs::read_to_string(&self.path).expect("Failed to read test data file");
        serde_json::from_str(&raw).expect("Test data file is not valid JSON")
    }

    pub fn config(&self) -> TalkerConfig {
        TalkerConfig {
            common: CoreConfig { port: 0 },
            data_file: self.path.clone(),
            log_level: "error".to_string(),
        }
    }

    pub fn state(&self) -> AppState {
        AppState::new(&self.config())
    }
}

impl Drop for TestDataFile {
    fn drop(&mut self) {
        std::fs::remove_file(&self.path).ok();
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub data: TestDataFile,
}

impl TestApp {
    pub async fn spawn(data: TestDataFile) -> Self {
        let app = Application::build(data.config())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            data,
        }
    }
}
