pub mod charts;
pub mod date_range_picker;
pub mod filter_panel;
pub mod stat_card;
pub mod ui;
