// Text Monitor - platform/mod.rs
//
// Platform abstraction layer: all filesystem access and config resolution.
// Dependencies: core (models, templates), util, directories crate.
// Must NOT depend on: app, ui.

pub mod config;
pub mod fs;
