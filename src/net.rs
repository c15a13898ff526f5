use anyhow::Context;
use std::collections::HashMap;
use tokio::sync::mpsc::Sender;

use crate::{ArcStr, app::config::Config, log::Log};

mod core;
pub mod message;
pub mod mock;
#[cfg(test)]
mod tests;

use message::Message;

/// The networking actor that provides a thread-safe interface for network operations.
///
/// This enum represents either a real networking actor or a mock implementation
/// for testing purposes. Only `GET` is needed: every page of a feed is fetched
/// by following a URL.
///
/// # Examples
/// ```ignore
/// let net = Net::spawn(config, log).await?;
/// let body = net.get(url, None).await?;
/// ```
///
/// # Thread Safety
/// Cloning is cheap as it only copies the channel sender or mock reference.
#[derive(Debug, Clone)]
pub enum Net {
    /// A real networking actor that performs HTTP requests
    Actual(Sender<Message>),
    /// A mock implementation for testing
    Mock(mock::Mock),
}

impl Net {
    /// Creates a new networking instance and spawns its actor.
    ///
    /// The HTTP client is configured from `config` (timeout and user agent).
    pub async fn spawn(config: Config, log: Log) -> anyhow::Result<Self> {
        let (net, _) = self::core::Core::new(config, log).await?.spawn();
        Ok(net)
    }

    /// Creates a new mock networking instance answering with the bodies in
    /// `responses`, keyed by URL.
    pub fn mock(responses: HashMap<ArcStr, ArcStr>) -> Self {
        Self::Mock(mock::Mock::new(responses))
    }

    /// Performs an HTTP GET request to the specified URL.
    ///
    /// # Arguments
    /// * `url` - The URL to send the GET request to
    /// * `headers` - Optional headers to include in the request
    ///
    /// # Returns
    /// The response body as a string, or an error if the request fails or
    /// the server answers with a non-success status.
    pub async fn get(
        &self,
        url: ArcStr,
        headers: Option<HashMap<ArcStr, ArcStr>>,
    ) -> anyhow::Result<ArcStr> {
        match self {
            Net::Actual(sender) => {
                let (tx, rx) = tokio::sync::oneshot::channel();
                sender
                    .send(Message::Get { url, headers, tx })
                    .await
                    .context("Sending message to Net actor")?;
                rx.await.context("Awaiting response from Net actor")?
            }
            Net::Mock(mock) => mock.get(url, headers).await,
        }
    }
}
