//! Domain layer containing the draft model and wizard rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, errors, credentials, state machine trait)
//! - `profile` - The profile draft, its entities and the wire payloads built from it
//! - `editor` - Positional list editor and the category → skills editor
//! - `wizard` - Step sequence and the password confirmation gate

pub mod editor;
pub mod foundation;
pub mod profile;
pub mod wizard;
