//! Activity Board Frontend
//!
//! Lists activities from the backend, signs students up and unregisters them,
//! and re-renders from server state after every change.

pub mod app;
pub mod board;
pub mod commands;
pub mod components;
pub mod config;
pub mod context;
pub mod escape;
pub mod logging;
pub mod models;
pub mod notifier;
pub mod render;
pub mod roster;

pub use app::App;
