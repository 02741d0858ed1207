//! User Interface module
//!
//! Thin terminal front-end over the progression engine: a status
//! dashboard, per-category action menus and the reset flow. All state
//! lives in the profile; the UI only holds cursors.

pub mod app;
pub mod menu;

pub use app::App;
