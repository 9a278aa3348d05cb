//! Events emitted by the coordinator for external collaborators.

use flock_core::AgentId;

/// A discrete fact detected during one coordinator step.
///
/// Events are buffered into a `Vec` during the scan and handed to the host
/// afterwards — a consumer callback can therefore never re-enter the
/// coordinator mid-scan.  What happens economically in response (rewards,
/// trades, chat) is entirely the consumer's business.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BehaviorEvent {
    /// Two agents collided and froze into a registered pair.
    Paired { a: AgentId, b: AgentId },

    /// The nearest-agent-to-user relationship changed.  Emitted exactly once
    /// per change, including the change to "nobody in range" (`None`).
    EncounterChanged(Option<AgentId>),

    /// An agent completed a waypoint visit: it held at the waypoint for the
    /// full freeze window and was released back to flocking.
    WaypointReward(AgentId),
}
