// Text Monitor - app/mod.rs
//
// Application layer: state management and the refresh scheduler.
// Dependencies: core, platform.
// Must NOT depend on: ui.

pub mod scheduler;
pub mod state;
