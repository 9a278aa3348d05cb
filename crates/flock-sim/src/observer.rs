//! Simulation observer trait for progress reporting and data collection.

use flock_agent::BehaviorStore;
use flock_behavior::BehaviorEvent;
use flock_core::{AgentId, Tick};
use flock_field::PositionFrame;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Per-event hooks (`on_paired`, …) fire
/// after the step's scan completes, so a hook may safely queue commands on
/// the sim for the next step.
///
/// # Example — pairing counter
///
/// ```rust,ignore
/// struct PairCounter { pairs: usize }
///
/// impl SimObserver for PairCounter {
///     fn on_paired(&mut self, _tick: Tick, _a: AgentId, _b: AgentId) {
///         self.pairs += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before the integration pass.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called at the end of each step with every event the scan produced.
    fn on_step_end(&mut self, _tick: Tick, _events: &[BehaviorEvent]) {}

    /// Two agents collided and froze into a pair this step.
    fn on_paired(&mut self, _tick: Tick, _a: AgentId, _b: AgentId) {}

    /// The nearest-agent-to-user relationship changed (including to `None`).
    fn on_encounter_changed(&mut self, _tick: Tick, _agent: Option<AgentId>) {}

    /// An agent completed a waypoint hold and was released.
    fn on_waypoint_reward(&mut self, _tick: Tick, _agent: AgentId) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks) with the freshly published frame and the discrete state, so
    /// trace writers can record a row without the sim knowing any format.
    fn on_snapshot(
        &mut self,
        _tick:     Tick,
        _frame:    &PositionFrame,
        _behavior: &BehaviorStore,
    ) {
    }

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
