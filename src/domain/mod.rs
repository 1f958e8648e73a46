// Domain layer - Readings, statistics and the pure functions over them
pub mod aggregates;
pub mod reading;
pub mod statistics;
