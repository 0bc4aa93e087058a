//! Capability provider discovery
//!
//! Locates the entity able to answer "which mods are missing which
//! requirements" for the current session: the game definition itself, or
//! the first attached feature that declared the capability. Absence is a
//! valid outcome, not an error - many games declare no requirements.

use crate::host::api::{FeatureCapability, Organizer};
use crate::requirement::types::RequirementModFiles;
use log::debug;

/// Provider of the mods-with-missing-requirements query
pub trait WithModRequirements: Send + Sync {
    /// Ordered list of unfulfilled requirements with their offending mods
    fn mods_with_missing_requirements(&self, organizer: &dyn Organizer)
        -> Vec<RequirementModFiles>;
}

/// Find a [`WithModRequirements`] provider for the current session.
///
/// Prefers a direct implementation on the game definition; otherwise scans
/// the game's feature registry for one declared with
/// [`FeatureCapability::ModRequirements`].
pub fn find_mod_requirements(organizer: &dyn Organizer) -> Option<&dyn WithModRequirements> {
    let game = organizer.managed_game()?;

    if let Some(direct) = game.as_mod_requirements() {
        debug!("Game '{}' implements mod requirements directly", game.name());
        return Some(direct);
    }

    let provider = game
        .features()
        .find(FeatureCapability::ModRequirements)
        .and_then(|feature| feature.as_mod_requirements());
    if provider.is_none() {
        debug!("Game '{}' has no mod requirements provider", game.name());
    }
    provider
}
