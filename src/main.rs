// ServerLogs - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. Seed loading and feed construction
// 5. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::core::...` etc.
pub use serverlogs::app;
pub use serverlogs::core;
pub use serverlogs::platform;
pub use serverlogs::ui;
pub use serverlogs::util;

use clap::Parser;
use std::path::PathBuf;

/// ServerLogs - game server log viewer with a simulated live feed.
///
/// Shows a server's recent log entries, newest first, and appends a
/// synthetic entry every few seconds while Auto-refresh is on.
#[derive(Parser, Debug)]
#[command(name = "ServerLogs", version, about)]
struct Cli {
    /// JSON file with the initial log entries (built-in sample if omitted).
    #[arg(short = 's', long = "seed")]
    seed: Option<PathBuf>,

    /// Server name shown above the log panel.
    #[arg(long = "server")]
    server: Option<String>,

    /// Start with Auto-refresh off.
    #[arg(long = "paused")]
    paused: bool,

    /// Alternative config.toml to load instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Apply the body font size to every text style, keeping monospace slightly
/// smaller as the egui defaults do.
fn configure_fonts(ctx: &egui::Context, body_size: f32) {
    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                egui::TextStyle::Heading => body_size * 1.4,
                egui::TextStyle::Small => body_size * 0.75,
                egui::TextStyle::Monospace => body_size * 0.9,
                _ => body_size,
            };
        }
    });
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so [logging] can take part in filter
    // selection; its warnings are replayed once tracing is up.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform_paths.config_file());
    let (mut config, mut warnings) = platform::config::load_config_file(&config_path);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "ServerLogs starting"
    );
    for warning in &warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // CLI overrides config.
    if let Some(seed) = cli.seed {
        config.seed_file = Some(seed);
    }
    if let Some(server) = cli.server {
        config.server_name = server;
    }
    if cli.paused {
        config.auto_refresh = false;
    }

    let (seed, seed_error) = app::seed_loader::load_seed(config.seed_file.as_deref());
    if let Some(e) = seed_error {
        warnings.push(format!("{e}. Using the built-in sample log."));
    }

    let feed = core::feed::LiveLogFeed::new(seed);
    tracing::info!(
        entries = feed.len(),
        auto_refresh = config.auto_refresh,
        server = %config.server_name,
        "Ready to launch GUI"
    );

    let state = app::state::AppState::new(feed, &config, warnings);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([600.0, 360.0]),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            configure_fonts(&cc.egui_ctx, font_size);
            Ok(Box::new(gui::ServerLogsApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch ServerLogs GUI: {e}");
        std::process::exit(1);
    }
}
