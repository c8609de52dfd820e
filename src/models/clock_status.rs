use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShiftPhase {
    BeforeShift,
    DuringShift,
    AfterShift,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockStatus {
    pub phase: ShiftPhase,
    /// Minutes to the next shift boundary; 0 once the shift is over.
    pub remaining_minutes: i64,
}
