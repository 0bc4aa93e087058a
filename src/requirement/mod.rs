//! Mod Requirement Contract
//!
//! Types a game definition (or one of its features) uses to report which
//! managed mods are missing declared requirements, plus the discovery
//! function that locates such a provider for the current session.

pub(crate) mod capability;
pub(crate) mod types;

// Public API module
pub mod api;
