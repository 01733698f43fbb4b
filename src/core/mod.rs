// ServerLogs - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: ui, platform, app.

pub mod export;
pub mod feed;
pub mod model;
pub mod schedule;
pub mod seed;
