//! Integrator tuning constants.

/// Tuning constants for the continuous vector field.
///
/// All fields are plain `pub` data: the host mutates them at any time and the
/// integrator reads them fresh at the start of each step, so a change is
/// visible on the next step and never mid-step.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlockConfig {
    /// Constant flocking speed, world units per step.  Velocity is
    /// renormalized to exactly this magnitude after force accumulation.
    pub base_speed: f32,

    /// Seeking agents move at `base_speed * seek_multiplier`.
    pub seek_multiplier: f32,

    /// Neighbors closer than this contribute a separation push.
    pub separation_radius: f32,

    /// Magnitude of each neighbor's separation contribution.
    pub separation_strength: f32,

    /// Magnitude of the pull back toward the origin once an agent leaves the
    /// arena square.
    pub containment_strength: f32,

    /// Half-size of the square arena; containment engages beyond ±this on
    /// either axis.
    pub arena_half_size: f32,

    /// A seeking agent closer to its target than this holds position and
    /// leaves the arrival decision to the coordinator (whose own arrival
    /// radius is slightly larger, so the coordinator always fires).
    pub seek_arrival_radius: f32,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            base_speed: 0.05,
            seek_multiplier: 3.0,
            separation_radius: 1.5,
            separation_strength: 0.02,
            containment_strength: 0.01,
            arena_half_size: 25.0,
            seek_arrival_radius: 0.2,
        }
    }
}
