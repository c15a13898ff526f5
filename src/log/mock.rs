use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::JoinHandle;

use super::data::{LogLevel, LogMessage};

/// Mock implementation of the Log actor for testing purposes.
///
/// Messages are stored in memory as soon as they are logged, so a test can
/// inspect them right after the operation that produced them.
#[derive(Debug, Clone, Default)]
pub struct Mock {
    messages: Arc<Mutex<Vec<LogMessage>>>,
}

impl Mock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self, scope: &'static str, message: String, level: LogLevel) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LogMessage {
                level,
                scope,
                message,
            });
    }

    /// Prints every stored message to stderr.
    pub fn flush(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            for message in self.get_messages().await {
                eprintln!("{message}");
            }
        })
    }

    pub async fn get_messages(&self) -> Vec<LogMessage> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
