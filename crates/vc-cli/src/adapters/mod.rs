//! Terminal implementations of the UI ports.

mod terminal_notifier;
mod terminal_out;
mod terminal_view;

pub use terminal_notifier::TerminalNotifier;
pub use terminal_out::TerminalOut;
pub use terminal_view::TerminalSessionView;
