//! `flock-core` — foundational types for the `rust_flock` simulation core.
//!
//! This crate is a dependency of every other `flock-*` crate.  It intentionally
//! has no `flock-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `PoiId`, the `USER_AGENT` index           |
//! | [`vec2`]   | `Vec2` planar vector math on the ground plane        |
//! | [`time`]   | `Tick`, `StepClock`, `SimConfig`                     |
//! | [`rng`]    | `AgentRng` (per-agent), `SimRng` (global)            |
//! | [`state`]  | `AgentState` enum                                    |
//! | [`error`]  | `FlockError`, `FlockResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod rng;
pub mod state;
pub mod time;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FlockError, FlockResult};
pub use ids::{AgentId, PoiId, USER_AGENT};
pub use rng::{AgentRng, SimRng};
pub use state::AgentState;
pub use time::{SimConfig, StepClock, Tick};
pub use vec2::Vec2;
