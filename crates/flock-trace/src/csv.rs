//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_trace.csv`
//! - `step_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{AgentTraceRow, StepSummaryRow, TraceResult};

/// Writes simulation traces to two CSV files.
pub struct CsvTraceWriter {
    agents:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvTraceWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> TraceResult<Self> {
        let mut agents = Writer::from_path(dir.join("agent_trace.csv"))?;
        agents.write_record(["agent_id", "tick", "x", "z", "vx", "vz", "state"])?;

        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record([
            "tick",
            "now_ms",
            "paired_events",
            "encounter_changes",
            "waypoint_rewards",
        ])?;

        Ok(Self {
            agents,
            summaries,
            finished: false,
        })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_agent_rows(&mut self, rows: &[AgentTraceRow]) -> TraceResult<()> {
        for row in rows {
            self.agents.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.z.to_string(),
                row.vx.to_string(),
                row.vz.to_string(),
                row.state.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> TraceResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.now_ms.to_string(),
            row.paired_events.to_string(),
            row.encounter_changes.to_string(),
            row.waypoint_rewards.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> TraceResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.agents.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
