// Domain layer - Readings, daily totals and chart configuration
pub mod chart;
pub mod rainfall;
pub mod reading;
