//! The `Sim` struct and its step loop.

use flock_agent::{AgentRngs, BehaviorStore};
use flock_behavior::{BehaviorEvent, Command, Coordinator, InteractionConfig};
use flock_core::{AgentId, AgentState, FlockError, SimConfig, StepClock, USER_AGENT, Vec2};
use flock_field::{FlockConfig, FrameBuffer, Integrator};

use crate::{SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim` owns all state and drives the per-step protocol:
///
/// 1. **Integrate**: the integrator reads the front frame and the discrete
///    state and writes the next positions/velocities into the back frame.
/// 2. **Coordinate**: the coordinator scans the *front* frame (one step
///    stale by design), applies queued commands, and mutates the discrete
///    state.  The clock is sampled exactly once for the whole scan.
/// 3. **Publish**: the back frame becomes the new front.
/// 4. **Dispatch**: the scan's buffered events reach the observer — after
///    the step, so a hook can never re-enter a scan in progress.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (agent count, total ticks, seed, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and maps it to simulated
    /// milliseconds.
    pub clock: StepClock,

    /// Continuous-motion tuning (speeds, steering radii, arena size).
    pub flock: FlockConfig,

    /// Discrete-interaction tuning (collision radii, timers, capacities).
    /// Read fresh every scan, so mutating it between steps is fine.
    pub interaction: InteractionConfig,

    /// Double-buffered position snapshots.  Consumers read `frames.front()`.
    pub frames: FrameBuffer,

    /// All discrete agent state (SoA arrays).  Written by the coordinator,
    /// read by the integrator.
    pub behavior: BehaviorStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// The discrete-state coordinator: pair registry, cooldowns, holds,
    /// encounter cursor, and the external command queue.
    pub coordinator: Coordinator,

    /// Host-controlled liveness flags, synced into the store each scan.
    pub alive: Vec<bool>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` steps from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Advance the simulation by one step, returning the events it produced.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> Vec<BehaviorEvent> {
        let now = self.clock.current_tick;
        observer.on_step_start(now);

        // ── 1. integration pass: back ← rule(front, behavior) ─────────────
        Integrator::step(&self.flock, &self.behavior, &mut self.frames, now);

        // ── 2. coordinator scan against the still-unpublished front ───────
        let now_ms = self.clock.now_ms();
        let events = self.coordinator.step(
            &self.interaction,
            now_ms,
            self.frames.front(),
            &self.alive,
            &mut self.behavior,
            &mut self.rngs,
        );

        // ── 3. publish the freshly written frame ──────────────────────────
        self.frames.publish();

        // ── 4. dispatch buffered events ───────────────────────────────────
        for event in &events {
            match *event {
                BehaviorEvent::Paired { a, b } => observer.on_paired(now, a, b),
                BehaviorEvent::EncounterChanged(agent) => {
                    observer.on_encounter_changed(now, agent);
                }
                BehaviorEvent::WaypointReward(agent) => {
                    observer.on_waypoint_reward(now, agent);
                }
            }
        }
        observer.on_step_end(now, &events);

        if self.config.snapshot_interval_ticks > 0
            && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
        {
            observer.on_snapshot(now, self.frames.front(), &self.behavior);
        }

        self.clock.advance();
        events
    }

    // ── External commands ─────────────────────────────────────────────────
    //
    // Commands queue here and apply at the start of the *next* scan, in
    // submission order.  Validation happens up front so a typo'd id fails
    // loudly instead of silently dropping mid-step.

    /// Redirect `agent` toward `target`, breaking any frozen pair it is in.
    pub fn request_seek(&mut self, agent: AgentId, target: Vec2) -> SimResult<()> {
        self.ensure_agent(agent)?;
        self.coordinator.push_command(Command::Seek { agent, target });
        Ok(())
    }

    /// Freeze `target` facing the user and walk the user to a stand-off
    /// point in front of it.  The user cannot greet itself.
    pub fn request_greet(&mut self, target: AgentId) -> SimResult<()> {
        self.ensure_agent(target)?;
        if target == USER_AGENT {
            return Err(FlockError::InvalidAgent(target).into());
        }
        self.coordinator.push_command(Command::Greet { target });
        Ok(())
    }

    /// Halt `agent` in place, keeping its current facing.
    pub fn release(&mut self, agent: AgentId) -> SimResult<()> {
        self.ensure_agent(agent)?;
        self.coordinator.push_command(Command::Release { agent });
        Ok(())
    }

    /// Flip `agent`'s liveness flag.  The state transition (to `Inactive`,
    /// or back out of it) lands during the next scan's liveness sync.
    pub fn set_alive(&mut self, agent: AgentId, alive: bool) -> SimResult<()> {
        self.ensure_agent(agent)?;
        self.alive[agent.index()] = alive;
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.behavior.count
    }

    /// The clock sample the next scan will use.
    #[inline]
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn state(&self, agent: AgentId) -> SimResult<AgentState> {
        self.ensure_agent(agent)?;
        Ok(self.behavior.state(agent))
    }

    /// Seek target, if `agent` is currently `Seeking` toward one.
    pub fn target(&self, agent: AgentId) -> SimResult<Option<Vec2>> {
        self.ensure_agent(agent)?;
        Ok(self.behavior.target(agent))
    }

    /// Facing direction (meaningful while `Frozen`).
    pub fn facing(&self, agent: AgentId) -> SimResult<Vec2> {
        self.ensure_agent(agent)?;
        Ok(self.behavior.facing(agent))
    }

    /// Position from the last published frame.
    pub fn position(&self, agent: AgentId) -> SimResult<Vec2> {
        self.ensure_agent(agent)?;
        Ok(self.frames.front().position(agent))
    }

    /// Velocity from the last published frame.
    pub fn velocity(&self, agent: AgentId) -> SimResult<Vec2> {
        self.ensure_agent(agent)?;
        Ok(self.frames.front().velocity(agent))
    }

    /// The currently reported nearest-to-user agent, if any.
    #[inline]
    pub fn encounter(&self) -> Option<AgentId> {
        self.coordinator.encounter()
    }

    #[inline]
    pub fn frozen_pair_count(&self) -> usize {
        self.coordinator.frozen_pair_count()
    }

    fn ensure_agent(&self, agent: AgentId) -> SimResult<()> {
        if self.behavior.contains(agent) {
            Ok(())
        } else {
            Err(FlockError::InvalidAgent(agent).into())
        }
    }
}
