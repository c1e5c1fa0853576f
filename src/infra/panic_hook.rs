use std::{io, panic};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};

/// Puts the terminal back into cooked mode before the panic message is
/// printed, so the report is readable and the shell stays usable.
pub fn install_terminal_restore_hook() {
    let previous = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();

        let payload = panic_message(panic_info.payload());
        tracing::error!(payload = %payload, "panic in UI thread");

        previous(panic_info);
    }));
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic payload omitted".to_owned())
}
