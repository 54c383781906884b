// File: crates/plotter/src/lib.rs
// Summary: Application layer shared by the CLI and its tests: config, inputs, app context, scheduler, output.

pub mod config;
pub mod inputs;
pub mod app;
pub mod scheduler;
pub mod output;

pub use app::{AppContext, Frames};
pub use config::Config;
pub use inputs::{InputChange, InputKey, Inputs, Parameters, UserFunction};
pub use scheduler::{FinalFrames, Scheduler};
