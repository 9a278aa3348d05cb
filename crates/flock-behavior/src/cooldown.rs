//! Post-unfreeze cooldown tracking.
//!
//! An agent fresh out of a frozen pair is still standing next to its former
//! partner; without a cooldown the very next collision scan would re-freeze
//! them immediately and the pair would oscillate forever.  Cooling-down
//! agents are skipped by pairwise collision admission but stay eligible for
//! user-initiated encounters.

use flock_core::AgentId;
use rustc_hash::FxHashMap;

/// Agent → "last unfrozen at" timestamps (ms).
#[derive(Default)]
pub struct CooldownTable {
    stamps: FxHashMap<AgentId, u64>,
}

impl CooldownTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `agent` was just unfrozen.
    #[inline]
    pub fn mark(&mut self, agent: AgentId, now_ms: u64) {
        self.stamps.insert(agent, now_ms);
    }

    /// `true` if `agent` currently has a cooldown entry.
    #[inline]
    pub fn is_cooling(&self, agent: AgentId) -> bool {
        self.stamps.contains_key(&agent)
    }

    /// Drop every entry whose full `window_ms` has elapsed.  A zero window
    /// means no cooldown at all: entries marked this step are purged this
    /// step.
    pub fn purge(&mut self, now_ms: u64, window_ms: u64) {
        self.stamps.retain(|_, &mut stamp| now_ms - stamp < window_ms);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }
}
