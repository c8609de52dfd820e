use serde::Serialize;

/// Monthly rollup shown on the dashboard. Always recomputed, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Number of `normal` records in the month.
    pub total_worked_days: usize,
    pub avg_daily_hours: f64,
    pub total_overtime_hours: f64,
    /// Subset of `total_overtime_hours` dated on Saturday or Sunday.
    pub weekend_overtime_hours: f64,
    /// Shortfall against `total_worked_days × required_daily_hours`; never negative.
    pub deficit_hours: f64,
}
