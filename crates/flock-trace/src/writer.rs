//! The `TraceWriter` trait implemented by backend writers.

use crate::{AgentTraceRow, StepSummaryRow, TraceResult};

/// Trait implemented by trace backends (CSV today; others slot in here).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimTraceObserver::take_error`][crate::SimTraceObserver::take_error].
pub trait TraceWriter {
    /// Write a batch of per-agent trace rows.
    fn write_agent_rows(&mut self, rows: &[AgentTraceRow]) -> TraceResult<()>;

    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> TraceResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> TraceResult<()>;
}
