//! `flock-field` — the flocking integrator for `rust_flock`.
//!
//! Advances every agent's position and velocity once per step, selecting the
//! update rule from the coordinator-owned [`AgentState`]:
//!
//! ```text
//! Inactive  → velocity zeroed, position held
//! Frozen    → velocity carries the facing hint, position held
//! Seeking   → constant-speed pursuit of the target point
//! Flocking  → containment + separation, renormalized to base speed
//! ```
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`config`]     | `FlockConfig` — tuning constants, mutable per step  |
//! | [`frame`]      | `PositionFrame`, `FrameBuffer` (double buffer)      |
//! | [`integrator`] | `Integrator::step` — the per-agent update rules     |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                |
//! |------------|-------------------------------------------------------|
//! | `parallel` | Integrates agent rows on Rayon's thread pool.         |
//!
//! [`AgentState`]: flock_core::AgentState

pub mod config;
pub mod frame;
pub mod integrator;

#[cfg(test)]
mod tests;

pub use config::FlockConfig;
pub use frame::{FrameBuffer, PositionFrame};
pub use integrator::Integrator;
