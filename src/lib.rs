//! Command interpreter and session state machine for a terminal-styled
//! portfolio. The core is pure and host-agnostic: submitted lines go in,
//! transcript entries and [`interpreter::Signal`]s come out, and the
//! embedding layer (browser bindings or the native REPL) owns timers,
//! rendering, and network delivery.

pub mod autocomplete;
pub mod command;
pub mod commands;
pub mod content;
pub mod error;
pub mod interpreter;
pub mod output;
pub mod session;
pub mod staged;
pub mod theme;
pub mod transport;
pub mod vfs;

#[cfg(target_arch = "wasm32")]
pub mod bindings;

pub use error::ShellError;
pub use interpreter::{Interpreter, Signal, Submission};
pub use output::OutputBlock;
pub use session::Session;
