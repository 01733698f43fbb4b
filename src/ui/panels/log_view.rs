// ServerLogs - ui/panels/log_view.rs
//
// Server log panel: heading, Auto-refresh toggle, and the entry list.
//
// Entries are drawn in snapshot order (newest first) with `show_rows`, so
// only the visible rows are laid out. Each row is one LayoutJob: a gray
// fixed-width timestamp, the level in its level colour, then the message.

use crate::app::state::AppState;
use crate::ui::theme;
use egui::text::{LayoutJob, TextFormat};
use std::time::Instant;

/// Render the log panel (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("Server Logs");
        ui.label(egui::RichText::new(&state.server_name).weak());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut enabled = state.auto_refresh();
            if ui
                .checkbox(&mut enabled, "Auto-refresh")
                .on_hover_text("Generate a new entry every few seconds")
                .changed()
            {
                state.toggle_auto_refresh(Instant::now());
            }
        });
    });
    ui.separator();

    let entries = state.feed.snapshot();
    if entries.is_empty() {
        ui.centered_and_justified(|ui| {
            if state.auto_refresh() {
                ui.label("Waiting for the first log entry\u{2026}");
            } else {
                ui.label("No log entries. Enable Auto-refresh to start the feed.");
            }
        });
        return;
    }

    let font = egui::FontId::monospace(theme::LOG_FONT_SIZE);
    let body_colour = theme::row_text_colour(state.dark_mode);

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show_rows(ui, theme::ROW_HEIGHT, entries.len(), |ui, row_range| {
            for idx in row_range {
                let Some(entry) = entries.get(idx) else {
                    continue;
                };

                let mut job = LayoutJob::default();
                job.append(
                    &format!(
                        "{:<width$} ",
                        entry.timestamp,
                        width = theme::TIMESTAMP_COLUMN_CHARS
                    ),
                    0.0,
                    TextFormat {
                        font_id: font.clone(),
                        color: theme::TIMESTAMP_TEXT,
                        ..Default::default()
                    },
                );
                job.append(
                    &format!(
                        "{:<width$}",
                        entry.level.label(),
                        width = theme::LEVEL_COLUMN_CHARS
                    ),
                    0.0,
                    TextFormat {
                        font_id: font.clone(),
                        color: theme::level_colour(entry.level.colour()),
                        ..Default::default()
                    },
                );
                job.append(
                    &entry.message,
                    0.0,
                    TextFormat {
                        font_id: font.clone(),
                        color: body_colour,
                        ..Default::default()
                    },
                );

                ui.label(job).on_hover_text(format!("Entry #{}", entry.id));
            }
        });
}
