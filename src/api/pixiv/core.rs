use anyhow::Context;
use tokio::task::JoinHandle;

use super::data::IllustResponse;
use super::message::Message;
use super::parse::parse_illust_page;
use crate::{ArcStr, log::Log, net::Net};

/// The core of the illustration API that turns cursors into pages.
///
/// The first page comes from the configured feed endpoint. Every following
/// page is fetched by requesting the `next_url` of the previous one verbatim;
/// both bodies go through the same parser.
#[derive(Debug)]
pub struct Core {
    /// The networking actor for making HTTP requests
    net: Net,
    log: Log,
    /// Endpoint of the first page of the feed
    feed_url: ArcStr,
}

impl Core {
    pub fn new(net: Net, log: Log, feed_url: ArcStr) -> Self {
        Self { net, log, feed_url }
    }

    /// Transforms the core into an actor.
    pub fn spawn(self) -> (super::IllustApi, JoinHandle<()>) {
        let (tx, mut rx) = tokio::sync::mpsc::channel(100);

        let handle = tokio::spawn(async move {
            while let Some(message) = rx.recv().await {
                match message {
                    Message::GetPage { cursor, tx } => {
                        let response = self.handle_get_page(cursor).await;
                        let _ = tx.send(response);
                    }
                }
            }
        });

        (super::IllustApi::Actual(tx), handle)
    }

    async fn handle_get_page(&self, cursor: Option<ArcStr>) -> anyhow::Result<IllustResponse> {
        let url = cursor.unwrap_or_else(|| self.feed_url.clone());
        let body = self
            .net
            .get(url.clone(), None)
            .await
            .with_context(|| format!("Fetching feed page {url}"))?;
        let page = parse_illust_page(&body).with_context(|| format!("Parsing feed page {url}"))?;

        self.log.info(
            "api",
            format!("{} illustrations from {url}", page.illusts.len()),
        );
        Ok(page)
    }
}
