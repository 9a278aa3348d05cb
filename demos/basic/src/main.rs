//! basic — smallest demo for the rust_flock simulation core.
//!
//! Runs 64 agents in a 50×50 arena for one simulated minute: they flock,
//! freeze into chatting pairs on collision, and occasionally wander to one of
//! four points of interest.  Halfway through, the user-controlled entity
//! walks over and greets whoever is nearest.  Traces land in
//! `trace/basic/`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use flock_behavior::BehaviorEvent;
use flock_core::{AgentId, AgentState, SimConfig, Tick, Vec2, USER_AGENT};
use flock_sim::{SimBuilder, SimObserver};
use flock_trace::{CsvTraceWriter, SimTraceObserver, TraceWriter};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:        usize = 64;
const SEED:               u64   = 42;
const TICK_DURATION_MS:   u32   = 16;    // ~60 steps per simulated second
const TOTAL_TICKS:        u64   = 3_750; // one simulated minute
const SNAPSHOT_INTERVAL:  u64   = 25;    // trace row every ~400 ms

// ── Observer wrapper to tally events ─────────────────────────────────────────

struct TallyObserver<W: TraceWriter> {
    inner:      SimTraceObserver<W>,
    pairs:      usize,
    encounters: usize,
    rewards:    usize,
}

impl<W: TraceWriter> TallyObserver<W> {
    fn new(inner: SimTraceObserver<W>) -> Self {
        Self { inner, pairs: 0, encounters: 0, rewards: 0 }
    }
}

impl<W: TraceWriter> SimObserver for TallyObserver<W> {
    fn on_step_end(&mut self, tick: Tick, events: &[BehaviorEvent]) {
        for event in events {
            match event {
                BehaviorEvent::Paired { .. } => self.pairs += 1,
                BehaviorEvent::EncounterChanged(Some(_)) => self.encounters += 1,
                BehaviorEvent::EncounterChanged(None) => {}
                BehaviorEvent::WaypointReward(_) => self.rewards += 1,
            }
        }
        self.inner.on_step_end(tick, events);
    }

    fn on_snapshot(
        &mut self,
        tick:     Tick,
        frame:    &flock_field::PositionFrame,
        behavior: &flock_agent::BehaviorStore,
    ) {
        self.inner.on_snapshot(tick, frame, behavior);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== basic — rust_flock ===");
    println!("Agents: {AGENT_COUNT}  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Sim config.
    let config = SimConfig {
        agent_count:             AGENT_COUNT,
        tick_duration_ms:        TICK_DURATION_MS,
        total_ticks:             TOTAL_TICKS,
        seed:                    SEED,
        snapshot_interval_ticks: SNAPSHOT_INTERVAL,
    };

    // 2. Build sim with four points of interest at the arena corners' midpoints.
    let mut sim = SimBuilder::new(config.clone())
        .points_of_interest(vec![
            Vec2::new(12.0, 12.0),
            Vec2::new(-12.0, 12.0),
            Vec2::new(-12.0, -12.0),
            Vec2::new(12.0, -12.0),
        ])
        .build()?;

    // 3. Set up tracing.
    std::fs::create_dir_all("trace/basic")?;
    let writer = CsvTraceWriter::new(Path::new("trace/basic"))?;
    let mut obs = TallyObserver::new(SimTraceObserver::new(writer, &config));

    // 4. First half: let the flock do its thing.
    let t0 = Instant::now();
    sim.run_steps(TOTAL_TICKS / 2, &mut obs);

    // 5. Walk the user to the nearest flocker and greet it.
    let user_pos = sim.position(USER_AGENT)?;
    let mut nearest: Option<(AgentId, f32)> = None;
    for i in 1..AGENT_COUNT as u32 {
        let agent = AgentId(i);
        if sim.state(agent)? == AgentState::Inactive {
            continue;
        }
        let dist_sq = user_pos.distance_sq(sim.position(agent)?);
        if nearest.is_none_or(|(_, best)| dist_sq < best) {
            nearest = Some((agent, dist_sq));
        }
    }
    if let Some((target, _)) = nearest {
        println!(
            "Greeting agent {target} at {} (tick {})",
            sim.position(target)?,
            sim.clock.current_tick
        );
        sim.request_greet(target)?;
    }

    // 6. Second half: run to the end.
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("trace error: {e}");
    }

    // 7. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  pairs formed       : {}", obs.pairs);
    println!("  encounters         : {}", obs.encounters);
    println!("  waypoint rewards   : {}", obs.rewards);
    println!("  active pairs at end: {}", sim.frozen_pair_count());
    println!();

    // 8. Final state histogram.
    let mut counts = [0usize; 4];
    for i in 0..AGENT_COUNT as u32 {
        counts[sim.state(AgentId(i))? as usize] += 1;
    }
    println!("{:<10} {:<8}", "State", "Agents");
    println!("{}", "-".repeat(18));
    for (state, count) in [
        (AgentState::Flocking, counts[AgentState::Flocking as usize]),
        (AgentState::Frozen,   counts[AgentState::Frozen as usize]),
        (AgentState::Seeking,  counts[AgentState::Seeking as usize]),
        (AgentState::Inactive, counts[AgentState::Inactive as usize]),
    ] {
        println!("{:<10} {:<8}", state.to_string(), count);
    }

    Ok(())
}
