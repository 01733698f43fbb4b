// ServerLogs - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the panels and drives the live feed from the frame loop.

use crate::app::state::AppState;
use crate::core::export;
use crate::ui;
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// The ServerLogs application.
pub struct ServerLogsApp {
    pub state: AppState,
}

impl ServerLogsApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Ask for a destination and write the current snapshot there.
    fn export_snapshot(&mut self, format: ExportFormat) {
        let Some(dest) = rfd::FileDialog::new()
            .add_filter(format.label(), &[format.extension()])
            .set_file_name(format!("server-logs.{}", format.extension()))
            .save_file()
        else {
            return;
        };

        self.state.status_message = match self.write_export(format, &dest) {
            Ok(n) => {
                tracing::info!(file = %dest.display(), entries = n, format = format.label(), "Exported snapshot");
                format!("Exported {n} entries to {}.", format.label())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Export failed");
                format!("{} export failed: {e}", format.label())
            }
        };
    }

    fn write_export(
        &self,
        format: ExportFormat,
        dest: &Path,
    ) -> crate::util::error::Result<usize> {
        let file = std::fs::File::create(dest).map_err(|e| {
            crate::util::error::ExportError::Io {
                path: dest.to_path_buf(),
                source: e,
            }
        })?;
        let entries = self.state.feed.snapshot();
        let n = match format {
            ExportFormat::Csv => export::export_csv(entries, file, dest)?,
            ExportFormat::Json => export::export_json(entries, file, dest)?,
        };
        Ok(n)
    }
}

impl eframe::App for ServerLogsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance the feed, then sleep until the next tick is due. While the
        // feed is paused nothing is scheduled; input events still repaint.
        let now = Instant::now();
        self.state.poll_feed(now);
        if let Some(wait) = self.state.repaint_after(now) {
            ctx.request_repaint_after(wait);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let has_entries = !self.state.feed.is_empty();
                    ui.add_enabled_ui(has_entries, |ui| {
                        ui.menu_button("Export", |ui| {
                            if ui.button("Export CSV...").clicked() {
                                self.export_snapshot(ExportFormat::Csv);
                                ui.close_menu();
                            }
                            if ui.button("Export JSON...").clicked() {
                                self.export_snapshot(ExportFormat::Json);
                                ui.close_menu();
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    let label = if self.state.auto_refresh() {
                        "Pause Auto-refresh"
                    } else {
                        "Resume Auto-refresh"
                    };
                    if ui.button(label).clicked() {
                        self.state.toggle_auto_refresh(Instant::now());
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Startup Warnings").clicked() {
                        self.state.show_warnings = true;
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                // LIVE badge, shown while the feed is running.
                if self.state.auto_refresh() {
                    ui.label(
                        egui::RichText::new(" \u{25cf} LIVE ")
                            .strong()
                            .color(ui::theme::LIVE_BADGE)
                            .background_color(egui::Color32::from_rgba_premultiplied(
                                34, 197, 94, 30,
                            )),
                    );
                    ui.separator();
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{}/{} entries",
                        self.state.feed.len(),
                        crate::util::constants::MAX_ENTRIES
                    ));
                });
            });
        });

        // Central panel (log list)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::log_view::render(ui, &mut self.state);
        });

        ui::panels::about::render(ctx, &mut self.state);
        ui::panels::warnings::render(ctx, &mut self.state);
    }
}
