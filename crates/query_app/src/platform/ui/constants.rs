use std::time::Duration;

use eframe::egui::Color32;

pub const APP_ID: &str = "query_menu";
pub const WINDOW_TITLE: &str = "Query Menu";
pub const WINDOW_SIZE: [f32; 2] = [440.0, 320.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [360.0, 260.0];

pub const HEADING: &str = "📋 Query Menu";
pub const COMBO_OPTIONS: &str = "query_option";
pub const PLACEHOLDER: &str = "Select an option";
pub const LABEL_RUN: &str = "Run query";
pub const LABEL_PROCESSING: &str = "Processing...";

pub const FORM_WIDTH: f32 = 320.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
pub const SECTION_SPACING: f32 = 12.0;

/// How often a pending query is polled while the window is otherwise idle.
pub const POLL_INTERVAL: Duration = Duration::from_millis(75);

pub const COLOR_SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);
pub const COLOR_FAILURE: Color32 = Color32::from_rgb(220, 38, 38);
