use std::fmt::Display;

use tokio::{
    sync::{mpsc::Sender, oneshot},
    task::JoinHandle,
};

use crate::ArcPath;

mod core;
mod data;
pub mod message;
pub mod mock;
#[cfg(test)]
mod tests;

pub use self::core::LogCore;
pub use data::{LogLevel, LogMessage};
use message::Message;

/// The logging actor that provides a thread-safe interface for logging operations.
///
/// This enum represents either a real logging actor or a mock implementation
/// for testing purposes. Every component of the crate receives a clone of the
/// same `Log`, which acts as the single diagnostic trace channel.
///
/// # Examples
/// ```ignore
/// let log = Log::spawn(LogLevel::Warning, 7, log_dir).await?;
/// log.info("app", "Application started");
/// ```
///
/// # Thread Safety
/// Cloning is cheap as it only copies the channel sender or the mock reference.
#[derive(Debug, Clone)]
pub enum Log {
    /// A real logging actor that writes to files and stderr
    Actual(Sender<Message>),
    /// A mock implementation that keeps messages in memory
    Mock(mock::Mock),
}

impl Log {
    /// Builds the logger core and spawns its actor.
    ///
    /// # Arguments
    /// * `level` - Minimum log level for messages to be printed to stderr on flush
    /// * `max_age` - Maximum age of log files in days before they are deleted (0 keeps them)
    /// * `log_dir` - Directory where log files will be stored
    ///
    /// # Errors
    /// Returns an error if the log directory or the log files cannot be created.
    pub async fn spawn(level: LogLevel, max_age: usize, log_dir: ArcPath) -> anyhow::Result<Self> {
        let (log, _) = LogCore::build(level, max_age, log_dir).await?.spawn();
        Ok(log)
    }

    /// Creates a new mock logger for testing.
    pub fn mock() -> Self {
        Self::Mock(mock::Mock::new())
    }

    /// Sends a [`LogMessage`] to the logger. The message is sent from a new
    /// task so the caller never waits on the logger.
    fn log(&self, scope: &'static str, message: String, level: LogLevel) {
        let sender = match self {
            Log::Mock(mock) => return mock.log(scope, message, level),
            Log::Actual(sender) => sender.clone(),
        };

        tokio::spawn(async move {
            // The logger only goes away after a flush, late messages are dropped
            let _ = sender
                .send(Message::Log(LogMessage {
                    level,
                    scope,
                    message,
                }))
                .await;
        });
    }

    /// Log a message with the `INFO` level
    pub fn info<M: Display>(&self, scope: &'static str, message: M) {
        self.log(scope, message.to_string(), LogLevel::Info);
    }

    /// Log a message with the `WARNING` level
    pub fn warn<M: Display>(&self, scope: &'static str, message: M) {
        self.log(scope, message.to_string(), LogLevel::Warning);
    }

    /// Log a message with the `ERROR` level
    pub fn error<M: Display>(&self, scope: &'static str, message: M) {
        self.log(scope, message.to_string(), LogLevel::Error);
    }

    /// Log an info message if the result is an error
    /// and return the result as is
    pub fn info_on_error<T, E: Display>(&self, scope: &'static str, result: Result<T, E>) -> Result<T, E> {
        if let Err(err) = &result {
            self.log(scope, err.to_string(), LogLevel::Info);
        }
        result
    }

    /// Log a warning message if the result is an error
    /// and return the result as is
    pub fn warn_on_error<T, E: Display>(&self, scope: &'static str, result: Result<T, E>) -> Result<T, E> {
        if let Err(err) = &result {
            self.log(scope, err.to_string(), LogLevel::Warning);
        }
        result
    }

    /// Log an error message if the result is an error
    /// and return the result as is
    pub fn error_on_error<T, E: Display>(&self, scope: &'static str, result: Result<T, E>) -> Result<T, E> {
        if let Err(err) = &result {
            self.log(scope, err.to_string(), LogLevel::Error);
        }
        result
    }

    /// Flushes the logger by printing its buffered messages to [`stderr`] and
    /// closing the log files. After this method is called, any message sent to
    /// the logger is silently dropped.
    ///
    /// The returned handle completes once the messages have been printed.
    ///
    /// [`stderr`]: std::io::stderr
    pub fn flush(self) -> JoinHandle<()> {
        match self {
            Self::Actual(sender) => tokio::spawn(async move {
                let (tx, rx) = oneshot::channel();
                // An already flushed logger has nothing left to print
                if sender.send(Message::Flush { tx }).await.is_ok() {
                    let _ = rx.await;
                }
            }),
            Self::Mock(mock) => mock.flush(),
        }
    }

    /// Collects the garbage from the logs directory. Garbage logs are the ones
    /// older than the `max_age` set when the logger was built.
    pub async fn collect_garbage(&self) {
        let Self::Actual(sender) = self else {
            return;
        };

        let _ = sender.send(Message::CollectGarbage).await;
    }

    /// Gets every message logged so far. Only the mock keeps messages around,
    /// so the real logger returns `None`.
    pub async fn get_messages(&self) -> Option<Vec<LogMessage>> {
        match self {
            Self::Actual(_) => None,
            Self::Mock(mock) => Some(mock.get_messages().await),
        }
    }
}
