//! Mobile Simulator library
//!
//! Exports the layout engine, the settings store and the egui front end so the
//! binary, the demos and the tests share one crate.

pub mod app;
pub mod config;
pub mod constant;
pub mod device;
pub mod layout;
pub mod preset;
pub mod scene;
pub mod style;
pub mod theme;
pub mod ui;
pub mod webview;
