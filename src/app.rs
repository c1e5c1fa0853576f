use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra, ui,
    usecases::{self, bootstrap},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let (context, _log_guard) = bootstrap::bootstrap(cli.config.as_deref())?;

            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            let mut shell = bootstrap::compose_shell(&context);
            tracing::info!(author = shell.orchestrator.author(), "shell composed");
            ui::shell::start(&context, &mut shell.event_source, &mut shell.orchestrator)?;
        }
    }

    Ok(())
}
