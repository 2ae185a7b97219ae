//! In-memory metadata source for unit tests.

use std::sync::Mutex;

use serde_json::Value;

use super::{FetchError, MetadataSource};

/// A recorded `get` call: path and owned query pairs
pub type RecordedCall = (String, Vec<(String, String)>);

/// Answers every request with the same canned body (or a 500) and records
/// what was asked.
pub struct StubSource {
    body: Option<Value>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubSource {
    pub fn answering(body: Value) -> Self {
        Self {
            body: Some(body),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            body: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl MetadataSource for StubSource {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, FetchError> {
        let owned = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.calls.lock().unwrap().push((path.to_string(), owned));

        self.body.clone().ok_or_else(|| FetchError::Status {
            path: path.to_string(),
            status: 500,
            message: Some("Internal Server Error".to_string()),
        })
    }
}
