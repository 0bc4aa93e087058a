//! Public API for the mod requirement contract

pub use crate::requirement::capability::{find_mod_requirements, WithModRequirements};
pub use crate::requirement::types::{ModRequirement, RequirementModFiles};
