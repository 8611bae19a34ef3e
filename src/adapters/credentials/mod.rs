//! Credential Store Adapters.
//!
//! - `InMemoryCredentialStore` - Process-local, for tests and short sessions
//! - `FileCredentialStore` - Token persisted to a single file

mod file;
mod memory;

pub use file::FileCredentialStore;
pub use memory::InMemoryCredentialStore;
