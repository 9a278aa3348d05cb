//! The per-agent integration rules.
//!
//! One call to [`Integrator::step`] reads the front frame plus the
//! coordinator's discrete arrays and fills the back frame.  Nothing here
//! mutates discrete state — arrivals, freezes, and collisions are the
//! coordinator's job on its own pass over the published frame.

use flock_agent::BehaviorStore;
use flock_core::{AgentState, Tick, Vec2};

use crate::{FlockConfig, FrameBuffer, PositionFrame};

/// Squared distance under which a neighbor counts as coincident and is
/// skipped by the separation scan (its push direction would be noise).
const COINCIDENT_SQ: f32 = 1.0e-4;

/// Stateless integrator — all inputs arrive as arguments so the borrow
/// checker can verify the single-writer split between this crate (positions,
/// velocities) and the coordinator (states, targets, facings).
pub struct Integrator;

impl Integrator {
    /// Integrate one step: `back ← rule(front, behavior)` for every agent.
    ///
    /// The caller publishes the buffer once the step's readers are done with
    /// the old front frame.
    pub fn step(
        cfg: &FlockConfig,
        behavior: &BehaviorStore,
        frames: &mut FrameBuffer,
        tick: Tick,
    ) {
        let (front, back) = frames.split();
        back.tick = tick;

        #[cfg(not(feature = "parallel"))]
        {
            for i in 0..front.len() {
                let (pos, vel) = integrate_one(i, cfg, behavior, front);
                back.positions[i] = pos;
                back.velocities[i] = vel;
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Every row reads only the immutable front frame, so the
            // parallel pass is bitwise identical to the sequential one.
            back.positions
                .par_iter_mut()
                .zip(back.velocities.par_iter_mut())
                .enumerate()
                .for_each(|(i, (pos_out, vel_out))| {
                    let (pos, vel) = integrate_one(i, cfg, behavior, front);
                    *pos_out = pos;
                    *vel_out = vel;
                });
        }
    }
}

/// Compute one agent's next `(position, velocity)`.
fn integrate_one(
    i: usize,
    cfg: &FlockConfig,
    behavior: &BehaviorStore,
    front: &PositionFrame,
) -> (Vec2, Vec2) {
    let pos = front.positions[i];
    let vel = front.velocities[i];

    match behavior.states[i] {
        // Dead: no motion, no residual heading.
        AgentState::Inactive => (pos, Vec2::ZERO),

        // Stationary; the velocity slot carries the facing hint for
        // renderers.  A degenerate facing keeps the previous heading so the
        // mesh orientation never snaps to NaN.
        AgentState::Frozen => {
            let facing = behavior.facings[i];
            let heading = if facing.is_degenerate() { vel } else { facing };
            (pos, heading)
        }

        AgentState::Seeking => match behavior.targets[i] {
            // Seeking without a target holds position until the coordinator
            // resolves the inconsistency.
            None => (pos, vel),
            Some(target) => {
                let to_target = target - pos;
                let arrival_sq = cfg.seek_arrival_radius * cfg.seek_arrival_radius;
                if to_target.length_sq() > arrival_sq {
                    let v = to_target.with_speed(cfg.base_speed * cfg.seek_multiplier, Vec2::FALLBACK);
                    (pos + v, v)
                } else {
                    // Close enough: hold and let the coordinator flag arrival.
                    (pos, vel)
                }
            }
        },

        AgentState::Flocking => {
            let mut accel = Vec2::ZERO;

            // Containment: pull back toward the center once outside the
            // arena square on either axis.
            if pos.x.abs() > cfg.arena_half_size || pos.z.abs() > cfg.arena_half_size {
                accel += (-pos).normalized_or(Vec2::FALLBACK) * cfg.containment_strength;
            }

            // Separation: unit push away from every neighbor inside the
            // radius.  O(n) per agent — O(n²) per step by design.
            let sep_sq = cfg.separation_radius * cfg.separation_radius;
            for (j, &other) in front.positions.iter().enumerate() {
                if j == i {
                    continue;
                }
                let diff = pos - other;
                let dist_sq = diff.length_sq();
                if dist_sq < sep_sq && dist_sq > COINCIDENT_SQ {
                    accel += diff * (cfg.separation_strength / dist_sq.sqrt());
                }
            }

            // Constant-speed flock: accumulate, then renormalize to exactly
            // base_speed.  A near-zero sum falls back to the fixed +z heading.
            let v = (vel + accel).with_speed(cfg.base_speed, Vec2::FALLBACK);
            (pos + v, v)
        }
    }
}
