pub mod reconcile;
pub mod record_detection;
pub mod result_generation;
pub mod scramble_generation;
pub mod solve_time;
pub mod statistics;
