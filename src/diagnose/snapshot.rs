//! Problem snapshot
//!
//! The most recently fetched provider result. Problem keys handed to the
//! host are positions in this snapshot; a key is only meaningful until the
//! next listing overwrites it. All reads go through `get`, so a stale or
//! out-of-range key degrades to `None` instead of faulting.

use crate::requirement::api::RequirementModFiles;

#[derive(Default)]
pub(crate) struct ProblemSnapshot {
    entries: Vec<RequirementModFiles>,
}

impl ProblemSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the snapshot in full, even with an empty result
    pub fn replace(&mut self, entries: Vec<RequirementModFiles>) {
        self.entries = entries;
    }

    pub fn get(&self, key: usize) -> Option<&RequirementModFiles> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Positional keys for the host: `0..N-1`
    pub fn keys(&self) -> Vec<usize> {
        (0..self.entries.len()).collect()
    }
}
