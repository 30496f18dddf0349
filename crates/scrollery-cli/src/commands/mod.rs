pub mod simulate;
pub mod step_at;
pub mod steps;
