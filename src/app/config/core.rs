use anyhow::Context;

use crate::ArcPath;

use super::{data::Data, message::Message};

/// The core configuration actor that owns the configuration data and its file.
pub struct Core {
    /// The path to the configuration file
    path: ArcPath,
    /// The current configuration data
    data: Data,
}

impl Core {
    /// Creates a new configuration core holding default values.
    pub fn new(path: ArcPath) -> Self {
        Self {
            path,
            data: Data::default(),
        }
    }

    /// Spawns the configuration actor and returns a handle to it.
    pub fn spawn(mut self) -> (super::Config, tokio::task::JoinHandle<()>) {
        let (tx, mut rx) = tokio::sync::mpsc::channel(32);
        let handle = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                match msg {
                    Message::Load { tx } => {
                        let res = self.load().await;
                        let _ = tx.send(res);
                    }
                    Message::LoadOrInit { tx } => {
                        let res = self.load_or_init().await;
                        let _ = tx.send(res);
                    }
                    Message::Save { tx } => {
                        let res = self.save().await;
                        let _ = tx.send(res);
                    }
                    Message::GetPath { opt, tx } => {
                        let _ = tx.send(self.data.path(opt));
                    }
                    Message::GetLogLevel { tx } => {
                        let _ = tx.send(self.data.log_level());
                    }
                    Message::GetUSize { opt, tx } => {
                        let _ = tx.send(self.data.usize(opt));
                    }
                    Message::GetStr { opt, tx } => {
                        let _ = tx.send(self.data.str(opt));
                    }
                    Message::SetPath { opt, path } => {
                        self.data.set_path(opt, path);
                    }
                    Message::SetLogLevel { level } => {
                        self.data.set_log_level(level);
                    }
                    Message::SetUSize { opt, size } => {
                        self.data.set_usize(opt, size);
                    }
                    Message::SetStr { opt, value } => {
                        self.data.set_str(opt, value);
                    }
                }
            }
        });
        (super::Config::Actual(tx), handle)
    }

    /// Loads the configuration from the file. On failure the current
    /// values are kept.
    async fn load(&mut self) -> anyhow::Result<()> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Reading config file {}", self.path.display()))?;
        self.data = toml::from_str(&contents)
            .with_context(|| format!("Parsing config file {}", self.path.display()))?;
        Ok(())
    }

    /// Loads the configuration file, or creates it with the current values if
    /// it does not exist. Any other failure is returned and the file on disk
    /// is left alone.
    async fn load_or_init(&mut self) -> anyhow::Result<()> {
        match tokio::fs::try_exists(&self.path).await {
            Ok(false) => self.save().await,
            Ok(true) => self.load().await,
            Err(err) => Err(err)
                .with_context(|| format!("Checking config file {}", self.path.display())),
        }
    }

    /// Saves the current configuration to the file, creating its parent
    /// directories if needed.
    async fn save(&self) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(&self.data).context("Serializing config")?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Creating config directory {}", parent.display()))?;
        }
        tokio::fs::write(&self.path, contents)
            .await
            .with_context(|| format!("Writing config file {}", self.path.display()))?;
        Ok(())
    }
}
