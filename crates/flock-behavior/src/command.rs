//! Externally queued coordinator commands.

use flock_core::{AgentId, Vec2};

/// A command from outside the core (UI click, chat session, network layer).
///
/// Commands queue into the coordinator and are applied at the start of its
/// step, never concurrently with the internal scan.  Bounds are validated at
/// the public API; entries that are stale by the time they drain are skipped
/// silently.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    /// Force `agent` into `Seeking` toward `target`, breaking any frozen-pair
    /// membership by force-releasing the partner.
    Seek { agent: AgentId, target: Vec2 },

    /// Walk the user-controlled entity to a stand-off point near `target` so
    /// a chat can start face to face.  The target is frozen facing the user
    /// immediately; the user is oriented toward it on arrival.
    Greet { target: AgentId },

    /// Force `agent` into `Frozen` regardless of current state (idempotent on
    /// already-frozen agents).  Issued when an external interaction ends.
    Release { agent: AgentId },
}
