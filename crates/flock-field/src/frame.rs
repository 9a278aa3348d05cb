//! Double-buffered position snapshots.
//!
//! The integrator writes the **back** frame while every consumer (the
//! coordinator, observers, renderers) reads the **front** frame — the last
//! fully completed snapshot.  `publish()` swaps the two after the step's
//! readers are done, so a consumer can never observe a partially-written
//! frame and the coordinator always operates on a snapshot that is at most
//! one step stale.  This mirrors the readback lag of a GPU-resident position
//! producer without ever exposing an in-progress buffer.

use flock_core::{AgentId, Tick, Vec2};

/// One complete position/velocity snapshot, index-aligned with agent identity.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionFrame {
    /// The tick whose integration produced this frame.
    pub tick: Tick,
    pub positions: Vec<Vec2>,
    pub velocities: Vec<Vec2>,
}

impl PositionFrame {
    pub fn new(positions: Vec<Vec2>, velocities: Vec<Vec2>) -> Self {
        debug_assert_eq!(positions.len(), velocities.len());
        Self {
            tick: Tick::ZERO,
            positions,
            velocities,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> Vec2 {
        self.positions[agent.index()]
    }

    #[inline]
    pub fn velocity(&self, agent: AgentId) -> Vec2 {
        self.velocities[agent.index()]
    }
}

/// The front/back frame pair owned by the simulation loop.
///
/// Step protocol:
///
/// 1. [`split`][Self::split] — integrator reads front, writes back;
/// 2. consumers read [`front`][Self::front] (still the previous snapshot);
/// 3. [`publish`][Self::publish] — the freshly written back frame becomes
///    the new front.
pub struct FrameBuffer {
    front: PositionFrame,
    back: PositionFrame,
}

impl FrameBuffer {
    /// Seed both frames with the initial spawn layout.
    pub fn new(positions: Vec<Vec2>, velocities: Vec<Vec2>) -> Self {
        let front = PositionFrame::new(positions, velocities);
        let back = front.clone();
        Self { front, back }
    }

    /// The last published (fully completed) frame.
    #[inline]
    pub fn front(&self) -> &PositionFrame {
        &self.front
    }

    /// Disjoint borrows for one integration pass: read-only front, writable
    /// back.
    #[inline]
    pub fn split(&mut self) -> (&PositionFrame, &mut PositionFrame) {
        (&self.front, &mut self.back)
    }

    /// Atomically make the back frame visible to consumers.
    #[inline]
    pub fn publish(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.front.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front.is_empty()
    }
}
