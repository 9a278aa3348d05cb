//! `flock-agent` — Structure-of-Arrays agent storage for `rust_flock`.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`store`]   | `BehaviorStore` (state/target/facing SoA), `AgentRngs`    |
//! | [`builder`] | `ArenaBuilder` (spawn layout + store construction)        |
//!
//! # Ownership model
//!
//! The discrete fields here (`states`, `targets`, `facings`) are written only
//! by the behavior coordinator.  Positions and velocities live in
//! `flock-field`'s frame buffer and are written only by the integrator.  The
//! two-struct split gives each component exclusive `&mut` access to its own
//! fields while the other holds a shared borrow — single-writer-per-field is
//! enforced by the borrow checker rather than by convention.

pub mod builder;
pub mod store;


pub use builder::{Arena, ArenaBuilder};
pub use store::{AgentRngs, BehaviorStore};
