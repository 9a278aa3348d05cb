//! The discrete behavioral state shared across all `flock-*` crates.
//!
//! Exactly four values are ever observable; the coordinator owns all
//! transitions and the integrator only reads the value to select its
//! per-agent update rule.

/// The behavioral mode of one agent.
///
/// Legal transitions (enforced by the coordinator):
/// `Flocking ⇄ Frozen`, `Flocking → Seeking → Frozen`, any → `Inactive`
/// while the agent is dead, and `Inactive → Flocking` on revival.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentState {
    /// Continuous movement: separation + arena containment at constant speed.
    #[default]
    Flocking,
    /// Stationary; only the facing direction may change.
    Frozen,
    /// Moving toward an explicit target point.
    Seeking,
    /// Dead — velocity forced to zero until an external revive.
    Inactive,
}

impl AgentState {
    /// `true` for modes in which the integrator displaces the agent.
    #[inline]
    pub fn is_mobile(self) -> bool {
        matches!(self, AgentState::Flocking | AgentState::Seeking)
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentState::Flocking => "flocking",
            AgentState::Frozen   => "frozen",
            AgentState::Seeking  => "seeking",
            AgentState::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for AgentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
