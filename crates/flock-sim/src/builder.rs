//! Fluent builder for constructing a [`Sim`].

use flock_agent::ArenaBuilder;
use flock_behavior::{Coordinator, InteractionConfig};
use flock_core::{SimConfig, Vec2};
use flock_field::{FlockConfig, FrameBuffer};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — agent count, total ticks, seed, tick duration, …
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                                  |
/// |---------------------------|------------------------------------------|
/// | `.flock_config(c)`        | `FlockConfig::default()`                 |
/// | `.interaction_config(c)`  | `InteractionConfig::default()`           |
/// | `.points_of_interest(v)`  | Empty — wander assignment never fires    |
/// | `.initial_positions(v)`   | Seeded uniform spawn in the arena square |
/// | `.initial_velocities(v)`  | Seeded small random drift                |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig { agent_count: 64, seed: 7, ..Default::default() })
///     .points_of_interest(vec![Vec2::new(10.0, -4.0)])
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:      SimConfig,
    flock:       FlockConfig,
    interaction: InteractionConfig,
    pois:        Vec<Vec2>,
    positions:   Option<Vec<Vec2>>,
    velocities:  Option<Vec<Vec2>>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            flock:       FlockConfig::default(),
            interaction: InteractionConfig::default(),
            pois:        Vec::new(),
            positions:   None,
            velocities:  None,
        }
    }

    /// Override the continuous-motion tuning constants.
    pub fn flock_config(mut self, flock: FlockConfig) -> Self {
        self.flock = flock;
        self
    }

    /// Override the discrete-interaction tuning constants.
    pub fn interaction_config(mut self, interaction: InteractionConfig) -> Self {
        self.interaction = interaction;
        self
    }

    /// Supply the waypoints used for opportunistic wander assignment.
    ///
    /// If not called, the list is empty and agents never wander.
    pub fn points_of_interest(mut self, pois: Vec<Vec2>) -> Self {
        self.pois = pois;
        self
    }

    /// Supply an explicit spawn position for each agent (must be length
    /// `agent_count`).  Overrides the seeded uniform spawn.
    pub fn initial_positions(mut self, positions: Vec<Vec2>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Supply an explicit initial velocity for each agent (must be length
    /// `agent_count`).  Overrides the seeded random drift.
    pub fn initial_velocities(mut self, velocities: Vec<Vec2>) -> Self {
        self.velocities = Some(velocities);
        self
    }

    /// Validate inputs, spawn the arena, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let agent_count = self.config.agent_count;
        if agent_count == 0 {
            return Err(SimError::Config(
                "agent_count must be at least 1 (index 0 is the user-controlled entity)".into(),
            ));
        }
        if self.config.tick_duration_ms == 0 {
            return Err(SimError::Config("tick_duration_ms must be nonzero".into()));
        }

        // ── Seeded spawn, then explicit overrides ─────────────────────────
        let arena = ArenaBuilder::new(agent_count, self.config.seed)
            .spawn_half_size(self.flock.arena_half_size)
            .build();

        let positions = match self.positions {
            Some(p) => {
                if p.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      p.len(),
                        what:     "initial positions",
                    });
                }
                p
            }
            None => arena.positions,
        };

        let velocities = match self.velocities {
            Some(v) => {
                if v.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      v.len(),
                        what:     "initial velocities",
                    });
                }
                v
            }
            None => arena.velocities,
        };

        let mut coordinator = Coordinator::new(self.interaction.max_frozen_pairs);
        coordinator.set_points_of_interest(self.pois);

        Ok(Sim {
            clock:       self.config.make_clock(),
            config:      self.config,
            flock:       self.flock,
            interaction: self.interaction,
            frames:      FrameBuffer::new(positions, velocities),
            behavior:    arena.behavior,
            rngs:        arena.rngs,
            coordinator,
            alive:       vec![true; agent_count],
        })
    }
}
