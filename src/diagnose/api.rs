//! Public API for the diagnostic adapter

pub use crate::diagnose::plugin::RequirementDiagnostic;
