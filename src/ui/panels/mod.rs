// Text Monitor - ui/panels/mod.rs

pub mod controls;
pub mod file_tab;
pub mod header;
