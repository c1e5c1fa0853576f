use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{
    app_config::MIN_EVENT_POLL_MS, AppConfig, ChatConfig, LogConfig, Theme, UiConfig,
};

/// Mirror of [`AppConfig`] where every field is optional, merged over defaults.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub chat: Option<FileChatConfig>,
    pub ui: Option<FileUiConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(chat) = self.chat {
            chat.merge_into(&mut config.chat);
        }

        if let Some(ui) = self.ui {
            ui.merge_into(&mut config.ui);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileChatConfig {
    pub author: Option<String>,
}

impl FileChatConfig {
    fn merge_into(self, config: &mut ChatConfig) {
        if let Some(author) = self.author {
            config.author = author;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub theme: Option<Theme>,
    pub event_poll_ms: Option<u64>,
}

impl FileUiConfig {
    fn merge_into(self, config: &mut UiConfig) {
        if let Some(theme) = self.theme {
            config.theme = theme;
        }

        if let Some(poll_ms) = self.event_poll_ms {
            config.event_poll_ms = poll_ms.max(MIN_EVENT_POLL_MS);
        }
    }
}
