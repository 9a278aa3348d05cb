//! `SimTraceObserver<W>` — bridges `SimObserver` to a `TraceWriter`.

use flock_agent::BehaviorStore;
use flock_behavior::BehaviorEvent;
use flock_core::{SimConfig, Tick};
use flock_field::PositionFrame;
use flock_sim::SimObserver;

use crate::row::{AgentTraceRow, StepSummaryRow};
use crate::writer::TraceWriter;
use crate::TraceError;

/// A [`SimObserver`] that writes agent traces and step summaries to any
/// [`TraceWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimTraceObserver<W: TraceWriter> {
    writer:           W,
    tick_duration_ms: u32,
    last_error:       Option<TraceError>,
}

impl<W: TraceWriter> SimTraceObserver<W> {
    /// Create an observer backed by `writer`, using `config` for the
    /// tick-to-milliseconds conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_duration_ms: config.tick_duration_ms,
            last_error:       None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<TraceError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::TraceResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> SimObserver for SimTraceObserver<W> {
    fn on_step_end(&mut self, tick: Tick, events: &[BehaviorEvent]) {
        let mut row = StepSummaryRow {
            tick:              tick.0,
            now_ms:            tick.0 * self.tick_duration_ms as u64,
            paired_events:     0,
            encounter_changes: 0,
            waypoint_rewards:  0,
        };
        for event in events {
            match event {
                BehaviorEvent::Paired { .. } => row.paired_events += 1,
                BehaviorEvent::EncounterChanged(_) => row.encounter_changes += 1,
                BehaviorEvent::WaypointReward(_) => row.waypoint_rewards += 1,
            }
        }
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, frame: &PositionFrame, behavior: &BehaviorStore) {
        let rows: Vec<AgentTraceRow> = (0..behavior.count)
            .map(|i| {
                let pos = frame.positions[i];
                let vel = frame.velocities[i];
                AgentTraceRow {
                    agent_id: i as u32,
                    tick:     tick.0,
                    x:        pos.x,
                    z:        pos.z,
                    vx:       vel.x,
                    vz:       vel.z,
                    state:    behavior.states[i].as_str(),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_agent_rows(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
