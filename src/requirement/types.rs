//! Requirement data types consumed by the diagnostic adapter

use crate::host::api::Organizer;
use std::collections::HashMap;
use std::sync::Arc;

/// A declared precondition for a mod to function correctly.
///
/// Evaluation happens outside this crate; the adapter only reads the name
/// and asks for a user-facing explanation.
pub trait ModRequirement: Send + Sync {
    /// Human-readable requirement name
    fn name(&self) -> &str;

    /// Explanation of the unfulfilled requirement for the current session.
    /// May contain embeddable HTML markup.
    fn problem_description(&self, organizer: &dyn Organizer) -> String;
}

/// One unfulfilled requirement together with the evidence for it:
/// which mods triggered the determination, and through which files.
#[derive(Clone)]
pub struct RequirementModFiles {
    pub requirement: Arc<dyn ModRequirement>,
    /// mod identifier -> file names relevant to the missing requirement
    pub mod_file_map: HashMap<String, Vec<String>>,
}

impl std::fmt::Debug for RequirementModFiles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequirementModFiles")
            .field("requirement", &self.requirement.name())
            .field("mod_file_map", &self.mod_file_map)
            .finish()
    }
}
