use anyhow::Result;

use crate::{
    domain::shell_state::ShellState,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
    },
};

use super::{styles::Palette, terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        theme = ?context.config.ui.theme,
        author = %context.config.chat.author,
        "starting TUI shell"
    );

    let palette = Palette::for_theme(context.config.ui.theme);
    let mut terminal = TerminalSession::enter()?;

    run_loop(event_source, orchestrator, |state| {
        terminal.draw(|frame| view::render(frame, state, &palette))
    })?;

    tracing::info!("TUI shell stopped");
    Ok(())
}

/// Draw, wait for one event, handle it; repeat while the shell is running.
fn run_loop<D>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&mut ShellState) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(orchestrator.state_mut())?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}
