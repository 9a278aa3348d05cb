//! `flock-sim` — step loop orchestrator for `rust_flock`.
//!
//! # Per-step protocol
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Integrate — back frame ← motion rule(front frame, discrete state).
//!   ② Coordinate — the coordinator scans the front frame (one step stale),
//!                  applies queued commands, and mutates the discrete state.
//!   ③ Publish   — the back frame becomes the new front.
//!   ④ Dispatch  — buffered events reach the observer hooks.
//! ```
//!
//! Determinism: the same `SimConfig` (seed included) and the same command
//! sequence produce bit-identical runs.  Parallel integration (the
//! `parallel` feature) does not change results — agents read only the
//! immutable front frame.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                |
//! |------------|-------------------------------------------------------|
//! | `parallel` | Runs the integration pass on Rayon's thread pool.     |
//! | `serde`    | Serde derives on frames and configs, for snapshots.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flock_core::SimConfig;
//! use flock_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig { agent_count: 64, ..Default::default() })
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
