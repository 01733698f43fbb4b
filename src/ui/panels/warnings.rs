// ServerLogs - ui/panels/warnings.rs
//
// Startup warnings window: config validation problems and rejected seed
// files. Opened automatically when startup produced any, and from
// View > Startup Warnings afterwards.

use crate::app::state::AppState;

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_warnings {
        return;
    }

    let mut open = true;
    egui::Window::new("Startup Warnings")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .min_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if state.warnings.is_empty() {
                ui.label("No warnings.");
                return;
            }
            egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                for warning in &state.warnings {
                    ui.colored_label(egui::Color32::from_rgb(253, 186, 116), warning);
                }
            });
        });

    if !open {
        state.show_warnings = false;
    }
}
