// Text Monitor - lib.rs
//
// Library entry point, exposing all non-GUI-shell modules for integration
// testing.
//
// The eframe `App` implementation lives in `gui.rs`, part of the binary.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
