// Text Monitor - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Colour for read-error text and failed-write warnings.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(248, 113, 113); // Red 400

/// Colour for the not-found placeholder and warning counts.
pub const WARNING_TEXT: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600

/// Status bar colours.
pub const STATUS_TEXT: Color32 = Color32::from_rgb(209, 213, 219); // Gray 300

/// Layout constants.
pub const WINDOW_SIZE: [f32; 2] = [600.0, 400.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [420.0, 300.0];
pub const TITLE_SIZE: f32 = 20.0;
pub const INFO_SIZE: f32 = 12.0;
pub const PATH_LABEL_SIZE: f32 = 11.0;
pub const PANEL_MARGIN: f32 = 10.0;
