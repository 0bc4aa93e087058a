//! Requirement Diagnostic Plugin
//!
//! The adapter between the host's diagnostic-listing contract and the
//! mod-requirements capability: it queries the provider on demand, keeps a
//! positional snapshot of the result, and renders each entry as an HTML
//! detail fragment.

pub(crate) mod plugin;
pub(crate) mod render;
pub(crate) mod snapshot;

// Public API module
pub mod api;

#[cfg(test)]
mod tests;
