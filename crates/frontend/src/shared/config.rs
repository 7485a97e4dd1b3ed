//! Compile-time configuration of the dashboard.

use std::time::Duration;

/// Port the aggregation backend listens on when no explicit base is configured
pub const DEFAULT_API_PORT: u16 = 5001;

/// Build-time override for the API base URL, e.g. `https://sales.example.com`
pub const API_BASE_OVERRIDE: Option<&str> = option_env!("DASHBOARD_API_BASE");

/// Shown whenever the server does not provide its own error text
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch data. Please try again later.";

pub const NO_DATA_MESSAGE: &str = "No data available for the selected filters.";

/// Delay between the last keystroke in the search box and the filter update
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Series colours, assigned by position modulo length
pub const CHART_PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8"];

pub const TOTAL_SERIES_COLOR: &str = "#8884d8";
pub const UNITS_SERIES_COLOR: &str = "#82ca9d";

/// Colour for the palette slot at `index`
pub fn palette_color(index: usize) -> &'static str {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(0), "#0088FE");
        assert_eq!(palette_color(4), "#8884d8");
        assert_eq!(palette_color(5), "#0088FE");
        assert_eq!(palette_color(7), "#FFBB28");
    }
}
