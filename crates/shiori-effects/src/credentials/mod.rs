//! Credential store handlers.

pub mod file;
pub mod memory;

pub use file::{CredentialFileConfig, FileCredentialStore};
pub use memory::MemoryCredentialStore;
