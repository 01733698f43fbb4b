// ServerLogs - app/mod.rs
//
// Application layer: state management and seed loading.
// Dependencies: core layer.
// Must NOT depend on: ui.

pub mod seed_loader;
pub mod state;
