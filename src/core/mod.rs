// Text Monitor - core/mod.rs
//
// Core business logic layer.
// Dependencies: chrono and util only.
// Must NOT depend on: ui, platform, app, or perform I/O directly.

pub mod model;
pub mod template;
