use anyhow::Context;
use reqwest::Client;
use std::{collections::HashMap, time::Duration};
use tokio::task::JoinHandle;

use crate::{
    ArcStr,
    app::config::{Config, StrOpt, USizeOpt},
    log::Log,
    net::{Net, message::Message},
};

/// Total time allowed for one request. A timeout of 0 seconds leaves the
/// request unbounded.
pub fn request_timeout(secs: usize) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs as u64))
}

/// The core of the networking system that handles HTTP requests.
///
/// Wraps a `reqwest` client configured once at construction. Requests are
/// executed one by one in the actor task.
#[derive(Debug)]
pub struct Core {
    /// Logging interface for operation logging
    log: Log,
    /// HTTP client for making requests
    client: Client,
}

impl Core {
    /// Creates a new networking core, reading the request timeout and user
    /// agent from the configuration.
    ///
    /// # Errors
    /// Fails if the configuration cannot be read or the client cannot be built.
    pub async fn new(config: Config, log: Log) -> anyhow::Result<Self> {
        let timeout = config.usize(USizeOpt::Timeout).await?;
        let user_agent = config.str(StrOpt::UserAgent).await?;

        let mut builder = Client::builder().user_agent(&*user_agent);
        if let Some(timeout) = request_timeout(timeout) {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Building HTTP client")?;

        Ok(Self { log, client })
    }

    /// Transforms the networking core instance into an actor.
    pub fn spawn(self) -> (Net, JoinHandle<()>) {
        let (tx, mut rx) = tokio::sync::mpsc::channel(100);

        let handle = tokio::spawn(async move {
            while let Some(message) = rx.recv().await {
                match message {
                    Message::Get { url, headers, tx } => {
                        let response = self
                            .handle_get_request(&url, headers)
                            .await
                            .with_context(|| format!("GET request failed for URL: {}", url));
                        let response = self.log.warn_on_error("net", response);
                        let _ = tx.send(response);
                    }
                }
            }
        });

        (Net::Actual(tx), handle)
    }

    /// Handles GET requests with optional headers
    async fn handle_get_request(
        &self,
        url: &str,
        headers: Option<HashMap<ArcStr, ArcStr>>,
    ) -> anyhow::Result<ArcStr> {
        self.log.info("net", format!("GET {url}"));
        let mut request = self.client.get(url);

        for (key, value) in headers.unwrap_or_default() {
            request = request.header(&*key, &*value);
        }

        let response = request
            .send()
            .await
            .context("Sending GET request")?
            .error_for_status()
            .context("Server answered with an error status")?;
        let text = response.text().await.context("Reading response body")?;
        Ok(ArcStr::from(text))
    }
}
