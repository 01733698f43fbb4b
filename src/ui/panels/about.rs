// ServerLogs - ui/panels/about.rs
//
// About dialog (Help > About): version line plus a small fact sheet for the
// feed currently on screen.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants::{APP_NAME, APP_VERSION, FEED_INTERVAL_SECS, MAX_ENTRIES};

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new(format!("About {APP_NAME}"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(300.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(APP_NAME);
                ui.label(egui::RichText::new(format!("v{APP_VERSION}")).weak());
            });
            ui.label("Game server log viewer with a simulated live feed.");
            ui.separator();

            egui::Grid::new("about_feed_facts")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Server");
                    ui.strong(&state.server_name);
                    ui.end_row();

                    ui.label("Feed");
                    if state.auto_refresh() {
                        ui.colored_label(theme::LIVE_BADGE, "LIVE");
                    } else {
                        ui.weak("paused");
                    }
                    ui.end_row();

                    ui.label("Entries");
                    ui.label(format!("{} / {MAX_ENTRIES}", state.feed.len()));
                    ui.end_row();

                    ui.label("Next id");
                    ui.monospace(state.feed.next_id().to_string());
                    ui.end_row();

                    ui.label("Interval");
                    ui.label(format!("{FEED_INTERVAL_SECS} s"));
                    ui.end_row();
                });
        });

    if !open {
        state.show_about = false;
    }
}
