use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::data::IllustResponse;
use crate::ArcStr;

/// Mock implementation of the illustration API for testing purposes.
///
/// Pages are keyed by cursor, `None` being the first page.
#[derive(Debug, Clone, Default)]
pub struct Mock {
    pages: Arc<Mutex<HashMap<Option<ArcStr>, IllustResponse>>>,
}

impl Mock {
    pub fn new(pages: HashMap<Option<ArcStr>, IllustResponse>) -> Self {
        Self {
            pages: Arc::new(Mutex::new(pages)),
        }
    }

    pub async fn get_page(&self, cursor: Option<ArcStr>) -> anyhow::Result<IllustResponse> {
        let pages = self.pages.lock().await;
        pages
            .get(&cursor)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Page not found in mock responses: {cursor:?}"))
    }
}
