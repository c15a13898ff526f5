use anyhow::Context;
use tokio::{fs::File, io::AsyncWriteExt, task::JoinHandle};

use super::data::{LogLevel, LogMessage};
use super::message::Message;
use crate::ArcPath;

/// Prefix of every timestamped log file, used to recognize them on cleanup.
const LOG_PREFIX: &str = "pixfeed_";

/// The core of the logging system that manages logging to both stderr and log files.
///
/// Every message is written to a timestamped log file and to `latest.log`.
/// Messages at or above the print level are also buffered and printed to
/// stderr when the logger is flushed, so they survive a terminal UI.
///
/// # Thread Safety
/// All logging operations are handled sequentially by the actor task.
#[derive(Debug)]
pub struct LogCore {
    /// Directory where log files are stored
    log_dir: ArcPath,
    /// Path to the current timestamped log file
    log_path: ArcPath,
    /// Handle to the current log file
    log_file: File,
    /// Handle to the "latest" log file
    latest_log_file: File,
    /// Buffer of messages to be printed to stderr
    logs_to_print: Vec<LogMessage>,
    /// Minimum level of messages to be printed to stderr
    print_level: LogLevel,
    /// Maximum age of log files in days before they are deleted
    max_age: usize,
}

impl LogCore {
    /// Creates the log directory and opens both log files.
    ///
    /// # Errors
    /// Returns an error if the directory or either log file cannot be created.
    pub async fn build(level: LogLevel, max_age: usize, log_dir: ArcPath) -> anyhow::Result<Self> {
        let log_path = ArcPath::from(log_dir.join(format!(
            "{LOG_PREFIX}{}.log",
            chrono::Utc::now().format("%Y-%m-%d-%H-%M-%S")
        )));
        let latest_log_path = log_dir.join("latest.log");

        tokio::fs::create_dir_all(&log_dir)
            .await
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let log_file = File::create(&log_path)
            .await
            .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;
        let latest_log_file = File::create(&latest_log_path).await.with_context(|| {
            format!(
                "Failed to create latest log file: {}",
                latest_log_path.display()
            )
        })?;

        Ok(Self {
            log_dir,
            log_path,
            log_file,
            latest_log_file,
            logs_to_print: Vec::new(),
            print_level: level,
            max_age,
        })
    }

    /// Transforms the logger core instance into an actor.
    pub fn spawn(mut self) -> (super::Log, JoinHandle<()>) {
        let (tx, mut rx) = tokio::sync::mpsc::channel(100);
        let handle = tokio::spawn(async move {
            while let Some(command) = rx.recv().await {
                match command {
                    Message::Log(msg) => {
                        self.log(msg).await;
                    }
                    Message::Flush { tx } => {
                        rx.close();
                        self.flush();
                        let _ = tx.send(());
                        break;
                    }
                    Message::CollectGarbage => {
                        self.collect_garbage().await;
                    }
                }
            }
        });
        (super::Log::Actual(tx), handle)
    }

    async fn log(&mut self, message: LogMessage) {
        let line = format!("{}\n", &message);

        // A log that cannot be written must not take the application down
        for file in [&mut self.log_file, &mut self.latest_log_file] {
            if file.write_all(line.as_bytes()).await.is_ok() {
                let _ = file.flush().await;
            }
        }

        if message.level >= self.print_level {
            self.logs_to_print.push(message);
        }
    }

    fn flush(self) {
        for message in &self.logs_to_print {
            eprintln!("{}", message);
        }
        if !self.logs_to_print.is_empty() {
            eprintln!("Check the full log file: {}", self.log_path.display());
        }
    }

    async fn collect_garbage(&mut self) {
        if self.max_age == 0 {
            return;
        }

        let now = std::time::SystemTime::now();
        let Ok(mut logs) = tokio::fs::read_dir(&self.log_dir).await else {
            self.log(LogMessage {
                level: LogLevel::Error,
                scope: "log",
                message: "Failed to read the logs directory during garbage collection".into(),
            })
            .await;
            return;
        };

        while let Ok(Some(entry)) = logs.next_entry().await {
            let path = entry.path();
            let filename = entry.file_name();
            let filename = filename.to_string_lossy();
            if !filename.ends_with(".log") || !filename.starts_with(LOG_PREFIX) {
                continue;
            }
            if path.as_path() == &*self.log_path {
                continue;
            }

            let Ok(Ok(created_date)) = entry.metadata().await.map(|meta| meta.created()) else {
                continue;
            };
            let Ok(age) = now.duration_since(created_date) else {
                continue;
            };
            let age = age.as_secs() / 60 / 60 / 24;

            if age as usize > self.max_age && tokio::fs::remove_file(&path).await.is_err() {
                self.log(LogMessage {
                    level: LogLevel::Warning,
                    scope: "log",
                    message: format!("Failed to remove the log file: {}", path.display()),
                })
                .await;
            }
        }
    }
}
