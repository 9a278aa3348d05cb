//! `flock-behavior` — the behavior coordinator for `rust_flock`.
//!
//! Owns every agent's discrete state and all timers, converting geometric
//! facts from the integrator's published frame into state transitions and
//! external events.  The coordinator never writes a position: it reads the
//! last completed [`PositionFrame`] (at most one step stale) and mutates only
//! the `BehaviorStore` plus its own bookkeeping.
//!
//! # Crate layout
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`config`]      | `InteractionConfig` — radii, durations, capacities   |
//! | [`registry`]    | `FrozenPair`, capacity-bounded `PairRegistry`        |
//! | [`cooldown`]    | `CooldownTable` — post-unfreeze re-collision guard   |
//! | [`command`]     | `Command` — externally queued seek/greet/release     |
//! | [`event`]       | `BehaviorEvent` — paired / encounter / reward        |
//! | [`coordinator`] | `Coordinator::step` — the strict-order per-step scan |
//!
//! [`PositionFrame`]: flock_field::PositionFrame

pub mod command;
pub mod config;
pub mod cooldown;
pub mod coordinator;
pub mod event;
pub mod registry;


pub use command::Command;
pub use config::InteractionConfig;
pub use cooldown::CooldownTable;
pub use coordinator::Coordinator;
pub use event::BehaviorEvent;
pub use registry::{AdmitOutcome, FrozenPair, PairRegistry};
