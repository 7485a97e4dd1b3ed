//! Page category constants.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"d100_sales_overview--dashboard"`)
//!   - `data-page-category` with one of the constants below

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Intentionally custom design, exempt from structural checks.
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_DASHBOARD, PAGE_CAT_CUSTOM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("d100_sales_overview--dashboard"));
        assert!(!is_valid_page_id("d100_sales_overview"));
        assert!(!is_valid_page_id("--dashboard"));
        assert!(!is_valid_page_id("d100--"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_DASHBOARD));
        assert!(!is_known_category("list"));
    }
}
