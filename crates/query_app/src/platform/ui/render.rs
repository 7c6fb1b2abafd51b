use eframe::egui;
use query_core::{AppViewModel, MessageTone, Msg};

use super::constants::*;

/// Draws the form and returns the messages produced by user input this frame.
pub fn render(ui: &mut egui::Ui, view: &AppViewModel, backend: &str) -> Vec<Msg> {
    let mut msgs = Vec::new();

    ui.vertical_centered(|ui| {
        ui.add_space(SECTION_SPACING);
        ui.heading(HEADING);
        ui.add_space(SECTION_SPACING);

        let mut selected = view.selected;
        egui::ComboBox::from_id_salt(COMBO_OPTIONS)
            .width(FORM_WIDTH)
            .selected_text(view.selected_label().unwrap_or(PLACEHOLDER))
            .show_ui(ui, |ui| {
                for option in &view.options {
                    ui.selectable_value(&mut selected, Some(*option), option.label());
                }
            });
        if let Some(option) = selected.filter(|option| view.selected != Some(*option)) {
            msgs.push(Msg::OptionSelected(option));
        }

        ui.add_space(SECTION_SPACING);
        if trigger_button(ui, view.loading).clicked() {
            msgs.push(Msg::QueryClicked);
        }

        if view.loading {
            ui.add_space(SECTION_SPACING);
            ui.spinner();
        }

        if view.has_message() {
            ui.add_space(SECTION_SPACING);
            ui.colored_label(message_color(view.tone), view.message.as_str());
        }

        ui.add_space(SECTION_SPACING);
        ui.small(format!("Backend: {backend}"));
    });

    msgs
}

/// The query button; it takes no clicks while a query is in flight.
fn trigger_button(ui: &mut egui::Ui, loading: bool) -> egui::Response {
    let button =
        egui::Button::new(trigger_label(loading)).min_size(egui::vec2(FORM_WIDTH, BUTTON_HEIGHT));
    ui.add_enabled(!loading, button)
}

pub fn trigger_label(loading: bool) -> &'static str {
    if loading {
        LABEL_PROCESSING
    } else {
        LABEL_RUN
    }
}

/// Green for success, red for everything else.
pub fn message_color(tone: Option<MessageTone>) -> egui::Color32 {
    match tone {
        Some(MessageTone::Success) => COLOR_SUCCESS,
        Some(MessageTone::Warning | MessageTone::Error) | None => COLOR_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_core::{update, AppState, QueryOption};

    #[test]
    fn button_label_follows_loading() {
        assert_eq!(trigger_label(false), "Run query");
        assert_eq!(trigger_label(true), "Processing...");
    }

    #[test]
    fn only_success_is_green() {
        assert_eq!(message_color(Some(MessageTone::Success)), COLOR_SUCCESS);
        assert_eq!(message_color(Some(MessageTone::Warning)), COLOR_FAILURE);
        assert_eq!(message_color(Some(MessageTone::Error)), COLOR_FAILURE);
    }

    #[test]
    fn idle_frame_produces_no_messages() {
        let (state, _) = update(AppState::new(), Msg::OptionSelected(QueryOption::Riesgos));
        let view = state.view();
        let ctx = egui::Context::default();
        let mut msgs = Vec::new();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                msgs = render(ui, &view, "http://localhost:5000/");
            });
        });

        assert!(msgs.is_empty());
    }

    fn screen() -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            ..Default::default()
        }
    }

    fn pointer(pos: egui::Pos2, pressed: bool) -> Vec<egui::Event> {
        vec![
            egui::Event::PointerMoved(pos),
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                modifiers: egui::Modifiers::default(),
            },
        ]
    }

    /// Lays the button out once, then presses and releases on its centre.
    fn click_trigger(loading: bool) -> bool {
        let ctx = egui::Context::default();
        let mut rect = egui::Rect::NOTHING;
        let mut clicked = false;

        for frame in 0..3 {
            let events = match frame {
                0 => Vec::new(),
                1 => pointer(rect.center(), true),
                _ => pointer(rect.center(), false),
            };
            let input = egui::RawInput {
                events,
                ..screen()
            };
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let response = trigger_button(ui, loading);
                    rect = response.rect;
                    clicked |= response.clicked();
                });
            });
        }

        clicked
    }

    #[test]
    fn trigger_accepts_clicks_when_idle() {
        assert!(click_trigger(false));
    }

    #[test]
    fn trigger_ignores_clicks_while_loading() {
        assert!(!click_trigger(true));
    }

    #[test]
    fn loading_frame_produces_no_messages() {
        let (state, _) = update(AppState::new(), Msg::OptionSelected(QueryOption::Riesgos));
        let (state, effects) = update(state, Msg::QueryClicked);
        assert_eq!(effects.len(), 1);
        let view = state.view();
        assert!(view.loading);

        let ctx = egui::Context::default();
        let mut msgs = Vec::new();
        let _ = ctx.run(screen(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                msgs = render(ui, &view, "http://localhost:5000/");
            });
        });

        assert!(msgs.is_empty());
    }
}
