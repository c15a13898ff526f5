use serde::{Deserialize, Serialize};

use crate::{ArcPath, ArcStr, log::LogLevel};

/// Options for path-based configuration values.
#[derive(Debug, Clone, Copy)]
pub enum PathOpt {
    /// Directory where log files are stored
    LogDir,
}

/// Options for numeric configuration values.
#[derive(Debug, Clone, Copy)]
pub enum USizeOpt {
    /// Maximum age of log files in days before they are deleted
    MaxAge,
    /// Timeout for network requests in seconds
    Timeout,
}

/// Options for string configuration values.
#[derive(Debug, Clone, Copy)]
pub enum StrOpt {
    /// Endpoint of the first page of the illustration feed
    FeedUrl,
    /// User agent sent with every request
    UserAgent,
}

/// All configurable values, as stored in the TOML config file.
///
/// Fields missing from the file fall back to their default, so an old config
/// file keeps working when new options are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Data {
    /// Endpoint of the first page of the illustration feed
    feed_url: ArcStr,
    /// User agent sent with every request
    user_agent: ArcStr,
    /// Directory where log files are stored
    log_dir: ArcPath,
    /// Current log level
    log_level: LogLevel,
    /// Maximum age of log files in days before they are deleted
    max_age: usize,
    /// Timeout for network requests in seconds, 0 for none
    timeout: usize,
}

impl Default for Data {
    fn default() -> Self {
        Self {
            feed_url: ArcStr::from("https://app-api.pixiv.net/v1/illust/recommended"),
            user_agent: ArcStr::from("PixivAndroidApp/5.0.234 (Android 11; Pixel 5)"),
            log_dir: ArcPath::from(std::path::Path::new("/tmp/pixfeed/logs")),
            log_level: LogLevel::Warning,
            max_age: 0,
            timeout: 30,
        }
    }
}

impl Data {
    pub fn path(&self, opt: PathOpt) -> ArcPath {
        match opt {
            PathOpt::LogDir => self.log_dir.clone(),
        }
    }

    pub fn set_path(&mut self, opt: PathOpt, path: ArcPath) {
        match opt {
            PathOpt::LogDir => self.log_dir = path,
        }
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn set_log_level(&mut self, level: LogLevel) {
        self.log_level = level;
    }

    pub fn usize(&self, opt: USizeOpt) -> usize {
        match opt {
            USizeOpt::MaxAge => self.max_age,
            USizeOpt::Timeout => self.timeout,
        }
    }

    pub fn set_usize(&mut self, opt: USizeOpt, value: usize) {
        match opt {
            USizeOpt::MaxAge => self.max_age = value,
            USizeOpt::Timeout => self.timeout = value,
        }
    }

    pub fn str(&self, opt: StrOpt) -> ArcStr {
        match opt {
            StrOpt::FeedUrl => self.feed_url.clone(),
            StrOpt::UserAgent => self.user_agent.clone(),
        }
    }

    pub fn set_str(&mut self, opt: StrOpt, value: ArcStr) {
        match opt {
            StrOpt::FeedUrl => self.feed_url = value,
            StrOpt::UserAgent => self.user_agent = value,
        }
    }
}
