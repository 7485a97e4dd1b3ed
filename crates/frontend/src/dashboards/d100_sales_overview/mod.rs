pub mod api;
pub mod filters;
pub mod presets;
pub mod projection;
pub mod state;
pub mod ui;
