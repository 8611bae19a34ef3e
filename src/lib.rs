//! Profile Wizard - guided assembly and submission of professional profiles
//!
//! This crate implements the core of a multi-step profile wizard: the step
//! state machine, the list and keyed-group editors behind each step, the
//! password gate, and the orchestration that submits a finished draft to a
//! remote profile service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
