//! Per-turn reactions
//!
//! Reactions are cosmetic: they never reach the model. Out-of-range targets
//! are ignored instead of reported.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Reaction label a user can attach to a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    Like,
    Dislike,
    Heart,
}

impl Reaction {
    pub fn glyph(self) -> &'static str {
        match self {
            Reaction::Like => "👍",
            Reaction::Dislike => "👎",
            Reaction::Heart => "❤️",
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Which turn a reaction applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionTarget {
    Index(usize),
    /// Whatever turn is newest when the reaction is applied
    Last,
}

impl ReactionTarget {
    /// Resolve against the current conversation length
    pub fn resolve(self, len: usize) -> Option<usize> {
        match self {
            ReactionTarget::Index(i) if i < len => Some(i),
            ReactionTarget::Index(_) => None,
            ReactionTarget::Last => len.checked_sub(1),
        }
    }
}

impl From<Option<usize>> for ReactionTarget {
    fn from(index: Option<usize>) -> Self {
        index.map_or(ReactionTarget::Last, ReactionTarget::Index)
    }
}

/// Reactions keyed by turn position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionMap {
    entries: BTreeMap<usize, Reaction>,
}

impl ReactionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a reaction if `target` resolves inside `0..len`.
    ///
    /// Returns whether the map changed. A later reaction on the same turn
    /// replaces the earlier one.
    pub fn set(&mut self, target: ReactionTarget, reaction: Reaction, len: usize) -> bool {
        match target.resolve(len) {
            Some(index) => {
                self.entries.insert(index, reaction);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<Reaction> {
        self.entries.get(&index).copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[allow(dead_code)] // Used in tests
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)] // Used in tests
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
