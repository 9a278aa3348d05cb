//! Plain data row types written by trace backends.

/// A snapshot of one agent's kinematic and behavioral state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentTraceRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub x:        f32,
    pub z:        f32,
    pub vx:       f32,
    pub vz:       f32,
    /// Behavioral mode name (`flocking`, `frozen`, `seeking`, `inactive`).
    pub state:    &'static str,
}

/// Summary statistics for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummaryRow {
    pub tick:              u64,
    /// Simulated milliseconds at this step (the scan's clock sample).
    pub now_ms:            u64,
    pub paired_events:     u64,
    pub encounter_changes: u64,
    pub waypoint_rewards:  u64,
}
