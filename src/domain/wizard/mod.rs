//! Wizard module - step sequence and the gates between steps.

mod step;
mod validation;

pub use step::WizardStep;
pub use validation::ValidationGate;
