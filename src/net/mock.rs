use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::ArcStr;

/// Mock implementation of the Net actor for testing purposes.
///
/// Holds canned response bodies keyed by URL and records every requested URL.
#[derive(Debug, Clone, Default)]
pub struct Mock {
    responses: Arc<Mutex<HashMap<ArcStr, ArcStr>>>,
    requests: Arc<Mutex<Vec<ArcStr>>>,
}

impl Mock {
    pub fn new(responses: HashMap<ArcStr, ArcStr>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::default(),
        }
    }

    /// Answers with the canned response for `url`, or an error if there is none.
    pub async fn get(
        &self,
        url: ArcStr,
        _headers: Option<HashMap<ArcStr, ArcStr>>,
    ) -> anyhow::Result<ArcStr> {
        self.requests.lock().await.push(url.clone());
        let responses = self.responses.lock().await;
        responses
            .get(&url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("GET request not found in mock responses: {}", url))
    }

    /// Every URL requested so far, in order.
    pub async fn requests(&self) -> Vec<ArcStr> {
        self.requests.lock().await.clone()
    }
}
