//! The per-step coordinator scan.
//!
//! One call to [`Coordinator::step`] runs the whole discrete update in a
//! strict order — ties and overlaps are resolved by this order, never
//! arbitrarily:
//!
//! ```text
//! 0. drain queued external commands
//! 1. liveness sync (dead → Inactive, revived → Flocking)
//! 2. frozen-pair expiry (→ Flocking + cooldown stamp)
//! 3. cooldown cleanup
//! 4. collision admission (capacity-bounded pairwise freeze)
//! 5. user seek arrival
//! 6. nearest-neighbor encounter change detection
//! 7. opportunistic waypoint assignment
//! 8. non-user waypoint arrival + timed reward release
//! ```
//!
//! The clock value is sampled once by the caller and passed in, so every
//! timer inside a step compares against the same instant.

use std::collections::VecDeque;

use flock_agent::{AgentRngs, BehaviorStore};
use flock_core::{AgentId, AgentState, USER_AGENT, Vec2};
use flock_field::PositionFrame;
use rustc_hash::FxHashMap;

use crate::registry::AdmitOutcome;
use crate::{BehaviorEvent, Command, CooldownTable, InteractionConfig, PairRegistry};

/// Owns all discrete bookkeeping: the pair registry, cooldowns, waypoint
/// holds, the encounter cursor, and the external command queue.
///
/// The coordinator reads positions exclusively from the published
/// [`PositionFrame`] it is handed — one step stale by design — and writes
/// only the [`BehaviorStore`].
pub struct Coordinator {
    registry: PairRegistry,
    cooldowns: CooldownTable,
    /// Waypoint holds: agent → release timestamp (ms).
    holds: FxHashMap<AgentId, u64>,
    /// The currently reported nearest-to-user agent, if any.
    encounter: Option<AgentId>,
    /// Greet target remembered until the user arrives at the stand-off point.
    pending_greet: Option<AgentId>,
    commands: VecDeque<Command>,
    /// Points of interest for opportunistic waypoint assignment.
    pois: Vec<Vec2>,
    events: Vec<BehaviorEvent>,
}

impl Coordinator {
    pub fn new(pair_capacity: usize) -> Self {
        Self {
            registry: PairRegistry::new(pair_capacity),
            cooldowns: CooldownTable::new(),
            holds: FxHashMap::default(),
            encounter: None,
            pending_greet: None,
            commands: VecDeque::new(),
            pois: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Replace the point-of-interest list used by wander assignment.
    pub fn set_points_of_interest(&mut self, pois: Vec<Vec2>) {
        self.pois = pois;
    }

    /// Queue an external command for the start of the next step.
    pub fn push_command(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    /// The currently reported encounter, if any.
    #[inline]
    pub fn encounter(&self) -> Option<AgentId> {
        self.encounter
    }

    /// Number of active frozen pairs.
    #[inline]
    pub fn frozen_pair_count(&self) -> usize {
        self.registry.len()
    }

    /// Read-only view of the pair registry (tests, debug overlays).
    #[inline]
    pub fn registry(&self) -> &PairRegistry {
        &self.registry
    }

    // ── The per-step scan ─────────────────────────────────────────────────

    /// Run one coordinator step against the last published frame.
    ///
    /// Returns the events detected this step; the caller dispatches them
    /// after the step so no consumer can re-enter mid-scan.
    pub fn step(
        &mut self,
        cfg: &InteractionConfig,
        now_ms: u64,
        frame: &PositionFrame,
        alive: &[bool],
        store: &mut BehaviorStore,
        rngs: &mut AgentRngs,
    ) -> Vec<BehaviorEvent> {
        self.registry.set_capacity(cfg.max_frozen_pairs);

        // ── 0. external commands ──────────────────────────────────────────
        while let Some(command) = self.commands.pop_front() {
            self.apply_command(command, cfg, frame, store);
        }

        // ── 1. liveness sync ──────────────────────────────────────────────
        //
        // Runs before everything else so a revived agent participates in
        // this very step's collision scan.
        for i in 0..store.count {
            let agent = AgentId(i as u32);
            let is_alive = alive.get(i).copied().unwrap_or(true);
            if !is_alive {
                if store.states[i] != AgentState::Inactive {
                    store.states[i] = AgentState::Inactive;
                    store.targets[i] = None;
                }
            } else if store.states[i] == AgentState::Inactive {
                // The user idles on revival; everyone else rejoins the flock.
                if agent == USER_AGENT {
                    let facing = store.facing(agent);
                    store.set_frozen(agent, facing);
                } else {
                    store.set_flocking(agent);
                }
            }
        }

        // ── 2. frozen-pair expiry ─────────────────────────────────────────
        for pair in self.registry.drain_expired(now_ms) {
            for agent in [pair.a, pair.b] {
                if store.state(agent) != AgentState::Inactive {
                    store.set_flocking(agent);
                }
                self.cooldowns.mark(agent, now_ms);
            }
        }

        // ── 3. cooldown cleanup ───────────────────────────────────────────
        self.cooldowns.purge(now_ms, cfg.cooldown_ms);

        // ── 4. collision admission ────────────────────────────────────────
        self.detect_collisions(cfg, now_ms, frame, store);

        // ── 5. user seek arrival ──────────────────────────────────────────
        self.detect_user_arrival(cfg, frame, store);

        // ── 6. encounter change detection ─────────────────────────────────
        self.detect_encounter(cfg, frame, store);

        // ── 7. opportunistic waypoint assignment ──────────────────────────
        self.assign_wander_targets(cfg, now_ms, store, rngs);

        // ── 8. waypoint arrival + timed release ───────────────────────────
        self.detect_waypoint_arrivals(cfg, now_ms, frame, store);
        self.release_due_holds(now_ms, store);

        std::mem::take(&mut self.events)
    }

    // ── Command application ───────────────────────────────────────────────

    fn apply_command(
        &mut self,
        command: Command,
        cfg: &InteractionConfig,
        frame: &PositionFrame,
        store: &mut BehaviorStore,
    ) {
        match command {
            Command::Seek { agent, target } => {
                if !store.contains(agent) {
                    return;
                }
                self.break_pair_of(agent, store);
                store.set_seeking(agent, target);
                if agent == USER_AGENT {
                    self.pending_greet = None;
                }
            }

            Command::Greet { target } => {
                if !store.contains(target) || target == USER_AGENT {
                    return;
                }
                let user_pos = frame.position(USER_AGENT);
                let target_pos = frame.position(target);
                // Direction from the target toward the user; doubles as the
                // target's facing and as the stand-off offset axis.
                let dir = (user_pos - target_pos).normalized_or(Vec2::FALLBACK);

                self.break_pair_of(target, store);
                store.set_frozen(target, dir);

                let stand_off = target_pos + dir * cfg.greet_distance;
                store.set_seeking(USER_AGENT, stand_off);
                self.pending_greet = Some(target);
            }

            Command::Release { agent } => {
                if !store.contains(agent) {
                    return;
                }
                let facing = store.facing(agent);
                store.set_frozen(agent, facing);
                if agent == USER_AGENT {
                    self.pending_greet = None;
                }
            }
        }
    }

    /// Force-remove `agent`'s pair, releasing the partner back to flocking.
    /// No cooldown is stamped — the interruption was external, not an expiry.
    fn break_pair_of(&mut self, agent: AgentId, store: &mut BehaviorStore) {
        if let Some(pair) = self.registry.remove_containing(agent) {
            // partner_of is Some by construction: agent is a member.
            if let Some(partner) = pair.partner_of(agent) {
                if store.state(partner) != AgentState::Inactive {
                    store.set_flocking(partner);
                }
            }
        }
    }

    // ── Step 4: collision admission ───────────────────────────────────────

    fn detect_collisions(
        &mut self,
        cfg: &InteractionConfig,
        now_ms: u64,
        frame: &PositionFrame,
        store: &mut BehaviorStore,
    ) {
        if self.registry.is_full() {
            return; // normal backpressure, not an error
        }
        let radius_sq = cfg.collision_radius * cfg.collision_radius;

        'scan: for i in 1..store.count {
            let a = AgentId(i as u32);
            if self.ineligible_for_pairing(a, store) {
                continue;
            }
            for j in (i + 1)..store.count {
                let b = AgentId(j as u32);
                if self.ineligible_for_pairing(b, store) {
                    continue;
                }
                let pos_a = frame.positions[i];
                let pos_b = frame.positions[j];
                if pos_a.distance_sq(pos_b) >= radius_sq {
                    continue;
                }

                match self.registry.admit(a, b, now_ms + cfg.freeze_ms) {
                    AdmitOutcome::Rejected => break 'scan,
                    AdmitOutcome::Admitted => {
                        // Mutual facing; coincident agents get the fallback
                        // axis and its negation.
                        let dir = (pos_b - pos_a).normalized_or(Vec2::FALLBACK);
                        store.set_frozen(a, dir);
                        store.set_frozen(b, -dir);
                        self.events.push(BehaviorEvent::Paired { a, b });
                        if self.registry.is_full() {
                            break 'scan;
                        }
                        // `a` is paired now — move on to the next candidate.
                        continue 'scan;
                    }
                }
            }
        }
    }

    /// Pairing skips the already-paired, the cooling-down, and anyone not
    /// free-flocking.  (Cooling agents remain eligible for user encounters.)
    #[inline]
    fn ineligible_for_pairing(&self, agent: AgentId, store: &BehaviorStore) -> bool {
        self.registry.contains(agent)
            || self.cooldowns.is_cooling(agent)
            || store.state(agent) != AgentState::Flocking
    }

    // ── Step 5: user seek arrival ─────────────────────────────────────────

    fn detect_user_arrival(
        &mut self,
        cfg: &InteractionConfig,
        frame: &PositionFrame,
        store: &mut BehaviorStore,
    ) {
        if store.state(USER_AGENT) != AgentState::Seeking {
            return;
        }
        let Some(target) = store.target(USER_AGENT) else {
            return;
        };
        let pos = frame.position(USER_AGENT);
        let approach = target - pos;
        if approach.length_sq() >= cfg.arrival_radius * cfg.arrival_radius {
            return;
        }

        let facing = match self.pending_greet.take() {
            // Arrived to greet someone: face them, not the waypoint.
            Some(greeted) if store.contains(greeted) => {
                (frame.position(greeted) - pos).normalized_or(Vec2::FALLBACK)
            }
            _ => approach.normalized_or(Vec2::FALLBACK),
        };
        store.set_frozen(USER_AGENT, facing);
    }

    // ── Step 6: encounter change detection ────────────────────────────────

    fn detect_encounter(
        &mut self,
        cfg: &InteractionConfig,
        frame: &PositionFrame,
        store: &BehaviorStore,
    ) {
        let user_pos = frame.position(USER_AGENT);
        let mut nearest: Option<AgentId> = None;
        let mut nearest_sq = cfg.encounter_radius * cfg.encounter_radius;

        for i in 1..store.count {
            if store.states[i] == AgentState::Inactive {
                continue;
            }
            let dist_sq = user_pos.distance_sq(frame.positions[i]);
            if dist_sq < nearest_sq {
                nearest_sq = dist_sq;
                nearest = Some(AgentId(i as u32));
            }
        }

        // Report transitions only — never re-emit an unchanged encounter.
        if nearest != self.encounter {
            self.encounter = nearest;
            self.events.push(BehaviorEvent::EncounterChanged(nearest));
        }
    }

    // ── Step 7: opportunistic waypoint assignment ─────────────────────────

    fn assign_wander_targets(
        &mut self,
        cfg: &InteractionConfig,
        now_ms: u64,
        store: &mut BehaviorStore,
        rngs: &mut AgentRngs,
    ) {
        if self.pois.is_empty() || cfg.wander_interval_ms == 0 {
            return;
        }
        // Cadence gate: the assignment window opens briefly once per interval.
        if now_ms % cfg.wander_interval_ms >= cfg.wander_window_ms {
            return;
        }

        for i in 1..store.count {
            if store.states[i] != AgentState::Flocking {
                continue;
            }
            let agent = AgentId(i as u32);
            let rng = rngs.get_mut(agent);
            if rng.gen_bool(cfg.wander_probability) {
                if let Some(&poi) = rng.choose(&self.pois) {
                    store.set_seeking(agent, poi);
                }
            }
        }
    }

    // ── Step 8: waypoint arrival + timed release ──────────────────────────

    fn detect_waypoint_arrivals(
        &mut self,
        cfg: &InteractionConfig,
        now_ms: u64,
        frame: &PositionFrame,
        store: &mut BehaviorStore,
    ) {
        let radius_sq = cfg.waypoint_radius * cfg.waypoint_radius;
        for i in 1..store.count {
            if store.states[i] != AgentState::Seeking {
                continue;
            }
            let Some(target) = store.targets[i] else {
                continue;
            };
            let approach = target - frame.positions[i];
            if approach.length_sq() < radius_sq {
                let agent = AgentId(i as u32);
                store.set_frozen(agent, approach.normalized_or(Vec2::FALLBACK));
                self.holds.insert(agent, now_ms + cfg.waypoint_freeze_ms);
            }
        }
    }

    fn release_due_holds(&mut self, now_ms: u64, store: &mut BehaviorStore) {
        let mut due: Vec<AgentId> = self
            .holds
            .iter()
            .filter(|&(_, &release_at)| now_ms >= release_at)
            .map(|(&agent, _)| agent)
            .collect();
        due.sort(); // ascending-id application keeps runs reproducible

        for agent in due {
            self.holds.remove(&agent);
            // The reward fires only if the hold survived untouched: a
            // revive, seek override, or death in the meantime forfeits it.
            if store.state(agent) == AgentState::Frozen {
                store.set_flocking(agent);
                self.events.push(BehaviorEvent::WaypointReward(agent));
            }
        }
    }
}
