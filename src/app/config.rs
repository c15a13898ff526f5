pub use data::{Data, PathOpt, StrOpt, USizeOpt};
use message::Message;

use crate::{ArcPath, ArcStr, log::LogLevel};
use anyhow::Context;

mod core;
mod data;
pub mod message;
pub mod mock;
#[cfg(test)]
mod tests;

/// The configuration actor that provides a thread-safe interface for configuration operations.
///
/// This enum represents either a real configuration actor backed by a TOML
/// file or a mock implementation that only keeps values in memory.
///
/// # Examples
/// ```ignore
/// let config = Config::spawn(config_path);
/// config.load().await?;
/// let feed_url = config.str(StrOpt::FeedUrl).await?;
/// ```
///
/// # Thread Safety
/// Cloning is cheap as it only copies the channel sender.
#[derive(Debug, Clone)]
pub enum Config {
    /// A real configuration actor that reads from and writes to a file
    Actual(tokio::sync::mpsc::Sender<Message>),
    /// A mock implementation for testing that stores data in memory
    Mock(mock::Mock),
}

impl Config {
    /// Creates a new configuration instance with default values and spawns its actor.
    ///
    /// # Arguments
    /// * `path` - The path to the configuration file
    pub fn spawn(path: ArcPath) -> Self {
        let (config, _) = self::core::Core::new(path).spawn();
        config
    }

    /// Creates a new mock configuration instance for testing.
    pub fn mock(data: Data) -> Self {
        Self::Mock(mock::Mock::new(data))
    }

    /// Sends a request to the actor and waits for its answer.
    async fn request<T>(
        sender: &tokio::sync::mpsc::Sender<Message>,
        message: impl FnOnce(tokio::sync::oneshot::Sender<T>) -> Message,
    ) -> anyhow::Result<T> {
        let (tx, rx) = tokio::sync::oneshot::channel();
        sender
            .send(message(tx))
            .await
            .context("Sending message to Config actor")?;
        rx.await.context("Awaiting response from Config actor")
    }

    /// Loads the configuration from the file.
    ///
    /// For the mock implementation, this is a no-op that always succeeds.
    pub async fn load(&self) -> anyhow::Result<()> {
        match self {
            Self::Actual(sender) => Self::request(sender, |tx| Message::Load { tx }).await?,
            Self::Mock(_) => Ok(()),
        }
    }

    /// Loads the configuration from the file, creating the file with default
    /// values when it does not exist yet.
    ///
    /// An unreadable or malformed file is an error and is never overwritten.
    /// For the mock implementation, this is a no-op that always succeeds.
    pub async fn load_or_init(&self) -> anyhow::Result<()> {
        match self {
            Self::Actual(sender) => Self::request(sender, |tx| Message::LoadOrInit { tx }).await?,
            Self::Mock(_) => Ok(()),
        }
    }

    /// Saves the current configuration to the file.
    ///
    /// For the mock implementation, this is a no-op that always succeeds.
    pub async fn save(&self) -> anyhow::Result<()> {
        match self {
            Self::Actual(sender) => Self::request(sender, |tx| Message::Save { tx }).await?,
            Self::Mock(_) => Ok(()),
        }
    }

    /// Gets a path-based configuration value.
    pub async fn path(&self, opt: PathOpt) -> anyhow::Result<ArcPath> {
        match self {
            Self::Actual(sender) => Self::request(sender, |tx| Message::GetPath { opt, tx }).await,
            Self::Mock(mock) => Ok(mock.path(opt).await),
        }
    }

    /// Sets a path-based configuration value.
    pub async fn set_path(&self, opt: PathOpt, path: ArcPath) -> anyhow::Result<()> {
        match self {
            Self::Actual(sender) => sender
                .send(Message::SetPath { opt, path })
                .await
                .context("Setting path with Config actor"),
            Self::Mock(mock) => {
                mock.set_path(opt, path).await;
                Ok(())
            }
        }
    }

    /// Gets the current log level.
    pub async fn log_level(&self) -> anyhow::Result<LogLevel> {
        match self {
            Self::Actual(sender) => Self::request(sender, |tx| Message::GetLogLevel { tx }).await,
            Self::Mock(mock) => Ok(mock.log_level().await),
        }
    }

    /// Sets the log level.
    pub async fn set_log_level(&self, level: LogLevel) -> anyhow::Result<()> {
        match self {
            Self::Actual(sender) => sender
                .send(Message::SetLogLevel { level })
                .await
                .context("Setting log level with Config actor"),
            Self::Mock(mock) => {
                mock.set_log_level(level).await;
                Ok(())
            }
        }
    }

    /// Gets a numeric configuration value.
    pub async fn usize(&self, opt: USizeOpt) -> anyhow::Result<usize> {
        match self {
            Self::Actual(sender) => Self::request(sender, |tx| Message::GetUSize { opt, tx }).await,
            Self::Mock(mock) => Ok(mock.usize(opt).await),
        }
    }

    /// Sets a numeric configuration value.
    pub async fn set_usize(&self, opt: USizeOpt, value: usize) -> anyhow::Result<()> {
        match self {
            Self::Actual(sender) => sender
                .send(Message::SetUSize { opt, size: value })
                .await
                .context("Setting numeric value with Config actor"),
            Self::Mock(mock) => {
                mock.set_usize(opt, value).await;
                Ok(())
            }
        }
    }

    /// Gets a string configuration value.
    pub async fn str(&self, opt: StrOpt) -> anyhow::Result<ArcStr> {
        match self {
            Self::Actual(sender) => Self::request(sender, |tx| Message::GetStr { opt, tx }).await,
            Self::Mock(mock) => Ok(mock.str(opt).await),
        }
    }

    /// Sets a string configuration value.
    pub async fn set_str(&self, opt: StrOpt, value: ArcStr) -> anyhow::Result<()> {
        match self {
            Self::Actual(sender) => sender
                .send(Message::SetStr { opt, value })
                .await
                .context("Setting string value with Config actor"),
            Self::Mock(mock) => {
                mock.set_str(opt, value).await;
                Ok(())
            }
        }
    }
}
