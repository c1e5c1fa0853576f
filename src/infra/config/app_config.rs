use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::message::LOCAL_AUTHOR;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub chat: ChatConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Log file path. Falls back to the user cache directory when unset.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatConfig {
    /// Author label attached to messages sent from the composer.
    pub author: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            author: LOCAL_AUTHOR.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Lower bound for the input poll timeout. Zero would turn the idle loop into
/// a busy redraw.
pub const MIN_EVENT_POLL_MS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    pub theme: Theme,
    pub event_poll_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            event_poll_ms: 100,
        }
    }
}
