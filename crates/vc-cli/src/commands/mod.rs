//! Command runners. Each one drives use cases through `AppRuntime` and
//! writes rendered output to a `TerminalOut`.

mod classify;
mod describe;
mod interactive;
mod upload;

pub use classify::classify;
pub use describe::describe;
pub use interactive::interactive;
pub use upload::upload_path;
