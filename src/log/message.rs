use tokio::sync::oneshot;

use super::data::LogMessage;

/// Messages that can be sent to a [`LogCore`](super::LogCore) actor.
#[derive(Debug)]
pub enum Message {
    /// Logs a message with the specified level and content
    Log(LogMessage),
    /// Flushes the logger by writing buffered messages to stderr and destroying the instance.
    /// `tx` fires once everything has been printed.
    Flush { tx: oneshot::Sender<()> },
    /// Runs the log garbage collector to delete old log files
    CollectGarbage,
}
