//! Chat backend handlers.

pub mod in_process;

pub use in_process::InProcessChatBackend;
