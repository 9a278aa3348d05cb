//! Fluent builder for constructing an agent arena in one step.
//!
//! # Usage
//!
//! ```rust
//! use flock_agent::ArenaBuilder;
//!
//! let arena = ArenaBuilder::new(64, /*seed=*/ 42)
//!     .spawn_half_size(25.0)
//!     .build();
//!
//! assert_eq!(arena.behavior.count, 64);
//! assert_eq!(arena.positions.len(), 64);
//! ```

use flock_core::{AgentState, SimRng, USER_AGENT, Vec2};

use crate::{AgentRngs, BehaviorStore};

/// Initial drift speed for spawned flockers — small, so the first flocking
/// step's renormalization dominates the heading rather than the spawn noise.
const SPAWN_DRIFT: f32 = 0.05;

/// Everything the simulation needs at step 0: the discrete store, per-agent
/// RNGs, and the initial spawn layout for the position frames.
pub struct Arena {
    pub behavior: BehaviorStore,
    pub rngs: AgentRngs,
    /// Initial position per agent; the user-controlled entity is at the origin.
    pub positions: Vec<Vec2>,
    /// Initial velocity per agent; zero for the user-controlled entity.
    pub velocities: Vec<Vec2>,
}

/// Fluent builder for [`Arena`].
///
/// All arrays are pre-allocated at construction time; callers overwrite the
/// spawn layout afterwards if they need explicit placements.
pub struct ArenaBuilder {
    count: usize,
    seed: u64,
    spawn_half_size: f32,
}

impl ArenaBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            spawn_half_size: 25.0,
        }
    }

    /// Half-size of the square spawn region (matches the arena half-size in
    /// most configurations).
    pub fn spawn_half_size(mut self, half: f32) -> Self {
        self.spawn_half_size = half;
        self
    }

    /// Construct the arena.
    ///
    /// Non-user agents spawn uniformly in the square with a small random
    /// drift velocity and start `Flocking`; the user-controlled entity spawns
    /// at the origin, stationary and `Frozen` (idle until commanded).
    pub fn build(self) -> Arena {
        let mut behavior = BehaviorStore::new(self.count);
        let rngs = AgentRngs::new(self.count, self.seed);

        // Spawn layout comes from a child of the master seed so it never
        // consumes draws from the per-agent streams used during stepping.
        let mut spawn_rng = SimRng::new(self.seed).child(1);

        let mut positions = vec![Vec2::ZERO; self.count];
        let mut velocities = vec![Vec2::ZERO; self.count];

        for i in 0..self.count {
            if i == USER_AGENT.index() {
                behavior.states[i] = AgentState::Frozen;
                continue;
            }
            let half = self.spawn_half_size;
            positions[i] = Vec2::new(
                spawn_rng.gen_range(-half..half),
                spawn_rng.gen_range(-half..half),
            );
            velocities[i] = Vec2::new(
                spawn_rng.gen_range(-SPAWN_DRIFT..SPAWN_DRIFT),
                spawn_rng.gen_range(-SPAWN_DRIFT..SPAWN_DRIFT),
            );
        }

        Arena {
            behavior,
            rngs,
            positions,
            velocities,
        }
    }
}
