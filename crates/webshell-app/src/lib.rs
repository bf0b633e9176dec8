//! Host side of the shell: CLI, logging, and the UI state that consumes
//! gatekeeper events. The `webshell` binary (feature `gui`) drives it from
//! a winit event loop.

pub mod cli;
pub mod logging;
pub mod shell;

pub use shell::{gatekeeper_from_config, ShellContext, ShellState};
