use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    infra::{self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError},
    usecases::{context::AppContext, shell::DefaultShellOrchestrator},
    ui::CrosstermEventSource,
};

/// Loads configuration and installs logging.
///
/// The returned guard flushes the log writer when dropped.
pub fn bootstrap(config_path: Option<&Path>) -> Result<(AppContext, WorkerGuard), AppError> {
    let context = build_context(&FileConfigAdapter::new(config_path))?;
    let log_guard = infra::logging::init(&context.config.logging)?;

    Ok((context, log_guard))
}

pub struct ShellComposition {
    pub event_source: CrosstermEventSource,
    pub orchestrator: DefaultShellOrchestrator,
}

/// Mounts a fresh shell: the orchestrator creates and owns its message store.
pub fn compose_shell(context: &AppContext) -> ShellComposition {
    ShellComposition {
        event_source: CrosstermEventSource::new(context.config.ui.event_poll_ms),
        orchestrator: DefaultShellOrchestrator::new(context.config.chat.author.clone()),
    }
}

fn build_context(config_adapter: &dyn ConfigAdapter) -> Result<AppContext, AppError> {
    let config = config_adapter.load()?;

    Ok(AppContext::new(config))
}
