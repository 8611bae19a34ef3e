//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the wizard core and the outside world. Adapters implement these ports.
//!
//! - `ProfileService` - Remote profile creation (atomic or fan-out) and the read path
//! - `AuthProvider` - Credential exchange for a bearer token
//! - `CredentialStore` - Durable storage of that token

mod auth_provider;
mod credential_store;
mod profile_service;

pub use auth_provider::AuthProvider;
pub use credential_store::{CredentialStore, CredentialStoreError};
pub use profile_service::{ProfileService, ServiceError, GENERIC_SERVICE_MESSAGE};
