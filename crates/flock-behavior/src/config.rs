//! Coordinator tuning constants.

/// Tuning constants for collision pairing, encounters, and timers.
///
/// Plain `pub` data, read fresh every step — the host may mutate any field
/// between steps and the change applies on the next scan.  Durations are
/// simulated milliseconds compared against the step clock's single per-step
/// sample.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionConfig {
    /// Two flocking agents closer than this freeze into a pair.
    pub collision_radius: f32,

    /// How long a collision pair stays frozen.
    pub freeze_ms: u64,

    /// Window after unfreezing during which an agent cannot re-pair.
    pub cooldown_ms: u64,

    /// Maximum simultaneously active frozen pairs (admission capacity).
    pub max_frozen_pairs: usize,

    /// A non-user agent this close to the user is an encounter candidate.
    pub encounter_radius: f32,

    /// The user counts as arrived within this distance of its seek target.
    pub arrival_radius: f32,

    /// Non-user agents count as arrived within this distance of their
    /// waypoint.
    pub waypoint_radius: f32,

    /// How long a non-user agent holds at a reached waypoint before the
    /// reward release.
    pub waypoint_freeze_ms: u64,

    /// Stand-off distance from the greet target at which the user stops.
    pub greet_distance: f32,

    /// Opportunistic waypoint assignment fires only while
    /// `now % wander_interval_ms < wander_window_ms`.
    pub wander_interval_ms: u64,
    pub wander_window_ms: u64,

    /// Per-agent probability of starting a wander during an open window step.
    pub wander_probability: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            collision_radius: 0.8,
            freeze_ms: 4_000,
            cooldown_ms: 800,
            max_frozen_pairs: 10,
            encounter_radius: 1.5,
            arrival_radius: 0.3,
            waypoint_radius: 0.71,
            waypoint_freeze_ms: 2_000,
            greet_distance: 1.2,
            wander_interval_ms: 5_000,
            wander_window_ms: 100,
            wander_probability: 0.05,
        }
    }
}
