//! Domain layer: messages, the observable store, and view-local state.

pub mod composer_state;
pub mod conversation_state;
pub mod events;
pub mod message;
pub mod message_store;
pub mod shell_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
