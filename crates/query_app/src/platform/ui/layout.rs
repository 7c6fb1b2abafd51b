use eframe::egui;

use super::constants::{WINDOW_MIN_SIZE, WINDOW_SIZE, WINDOW_TITLE};

pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE),
        ..Default::default()
    }
}
