//! Command-line entry points: argument handling and the release workflow

pub mod args;
pub mod orchestration;

pub use args::{normalize_args, Args};
pub use orchestration::{best_effort, run, run_release, ReleaseOutcome};
