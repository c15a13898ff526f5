use anyhow::Context;
use std::collections::HashMap;
use tokio::sync::{mpsc::Sender, oneshot};

use crate::{ArcStr, app::list::PageLoader, log::Log, net::Net};

mod core;
pub mod data;
pub mod message;
pub mod mock;
pub mod parse;
#[cfg(test)]
mod tests;

pub use data::{Illust, IllustKind, IllustResponse, IllustTag, IllustUser, ImageUrls};
pub use parse::ParseError;
use message::Message;

/// The illustration API actor that fetches pages of an illustration feed.
///
/// Sits between the [`Net`] actor and the rest of the application: it knows
/// where the first page lives and how to parse a page, so callers only deal
/// with cursors and [`IllustResponse`]s.
///
/// # Examples
/// ```ignore
/// let api = IllustApi::spawn(net, log, feed_url);
/// let first = api.get_page(None).await?;
/// let second = api.get_page(first.next_url.clone()).await?;
/// ```
///
/// # Thread Safety
/// Cloning is cheap as it only copies the channel sender or mock reference.
#[derive(Debug, Clone)]
pub enum IllustApi {
    /// A real API actor that performs HTTP requests through the networking actor
    Actual(Sender<Message>),
    /// A mock implementation for testing
    Mock(mock::Mock),
}

impl IllustApi {
    /// Spawns the API actor.
    ///
    /// # Arguments
    /// * `net` - The networking actor for making HTTP requests
    /// * `log` - The logging actor
    /// * `feed_url` - Endpoint of the first page of the feed
    pub fn spawn(net: Net, log: Log, feed_url: ArcStr) -> Self {
        let (api, _) = self::core::Core::new(net, log, feed_url).spawn();
        api
    }

    /// Creates a mock answering with the given pages, keyed by cursor.
    pub fn mock(pages: HashMap<Option<ArcStr>, IllustResponse>) -> Self {
        Self::Mock(mock::Mock::new(pages))
    }

    /// Fetches a page of the feed.
    ///
    /// # Arguments
    /// * `cursor` - `None` for the first page, or the `next_url` of a previous page
    ///
    /// # Errors
    /// Fails if the request fails or the body cannot be parsed into a page.
    pub async fn get_page(&self, cursor: Option<ArcStr>) -> anyhow::Result<IllustResponse> {
        match self {
            Self::Actual(sender) => {
                let (tx, rx) = oneshot::channel();
                sender
                    .send(Message::GetPage { cursor, tx })
                    .await
                    .context("Sending message to IllustApi actor")?;
                rx.await.context("Receiving response from IllustApi actor")?
            }
            Self::Mock(mock) => mock.get_page(cursor).await,
        }
    }
}

impl PageLoader<IllustResponse> for IllustApi {
    async fn load(&self, cursor: Option<ArcStr>) -> anyhow::Result<IllustResponse> {
        self.get_page(cursor).await
    }
}
