//! Profile Service Adapters.
//!
//! ## Available Adapters
//!
//! - `HttpProfileService` - REST client for the profile service
//! - `MockProfileService` - Configurable mock for testing

mod dto;
mod http;
mod mock;

pub use http::{HttpProfileService, HttpProfileServiceConfig};
pub use mock::{MockCall, MockProfileService};
