//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the wizard core to external systems:
//! - `profile_service` - Profile service clients (HTTP, mock)
//! - `credentials` - Token storage (in-memory, file)

pub mod credentials;
pub mod profile_service;

pub use credentials::{FileCredentialStore, InMemoryCredentialStore};
pub use profile_service::{HttpProfileService, HttpProfileServiceConfig, MockCall, MockProfileService};
