//! Core agent storage: `BehaviorStore` (discrete SoA data) and `AgentRngs`.
//!
//! # Why two structs?
//!
//! The coordinator needs `&mut AgentRngs` (exclusive access to each agent's
//! RNG for the opportunistic waypoint draw) and `&mut BehaviorStore` at the
//! same time, while the integrator needs only `&BehaviorStore`.  Keeping the
//! RNGs out of the store lets every caller take exactly the borrows it needs.

use flock_core::{AgentId, AgentRng, AgentState, Vec2};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`BehaviorStore`] so the
/// coordinator can hold `&mut AgentRngs` alongside its store borrow.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── BehaviorStore ─────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all discrete agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let state = store.states[agent.index()];  // O(1), cache-friendly
/// ```
///
/// The source this core reimplements packed the seek target and the frozen
/// facing direction into one dual-purpose field; they are deliberately split
/// here — `targets` is only meaningful while `Seeking`, `facings` is an
/// orientation hint consumed by renderers while `Frozen`.
pub struct BehaviorStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Discrete behavioral mode, the integrator's per-agent rule selector.
    pub states: Vec<AgentState>,

    /// Seek destination.  `None` unless the agent is `Seeking`.
    pub targets: Vec<Option<Vec2>>,

    /// Orientation hint while stationary.  Never integrated into position.
    pub facings: Vec<Vec2>,
}

impl BehaviorStore {
    /// All agents start `Flocking` with no target and the fallback facing.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            states: vec![AgentState::Flocking; count],
            targets: vec![None; count],
            facings: vec![Vec2::FALLBACK; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `true` if `agent` indexes a real slot.
    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn state(&self, agent: AgentId) -> AgentState {
        self.states[agent.index()]
    }

    #[inline]
    pub fn target(&self, agent: AgentId) -> Option<Vec2> {
        self.targets[agent.index()]
    }

    #[inline]
    pub fn facing(&self, agent: AgentId) -> Vec2 {
        self.facings[agent.index()]
    }

    /// Put `agent` on course toward `target`.
    #[inline]
    pub fn set_seeking(&mut self, agent: AgentId, target: Vec2) {
        self.states[agent.index()] = AgentState::Seeking;
        self.targets[agent.index()] = Some(target);
    }

    /// Freeze `agent` in place with the given facing; any seek target is
    /// dropped so the two fields can never disagree.
    #[inline]
    pub fn set_frozen(&mut self, agent: AgentId, facing: Vec2) {
        self.states[agent.index()] = AgentState::Frozen;
        self.targets[agent.index()] = None;
        self.facings[agent.index()] = facing;
    }

    /// Return `agent` to free flocking.
    #[inline]
    pub fn set_flocking(&mut self, agent: AgentId) {
        self.states[agent.index()] = AgentState::Flocking;
        self.targets[agent.index()] = None;
    }
}
