//! `flock-trace` — simulation trace writers for `rust_flock`.
//!
//! The CSV backend creates two files:
//!
//! | File                 | Contents                                          |
//! |----------------------|---------------------------------------------------|
//! | `agent_trace.csv`    | Per-agent position/velocity/state at snapshots    |
//! | `step_summaries.csv` | Per-step event counts and the clock sample        |
//!
//! Backends implement [`TraceWriter`] and are driven by [`SimTraceObserver`],
//! which implements `flock_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use flock_trace::{CsvTraceWriter, SimTraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./trace"))?;
//! let mut obs = SimTraceObserver::new(writer, &config);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("trace error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvTraceWriter;
pub use error::{TraceError, TraceResult};
pub use observer::SimTraceObserver;
pub use row::{AgentTraceRow, StepSummaryRow};
pub use writer::TraceWriter;
