//! PageFrame: root wrapper for every page.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`                  `"{entity}--{category}"`, e.g. `"d100_sales_overview--dashboard"`
//!   - `data-page-category`  one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// BEM class for a page category
fn page_class(category: &str, extra: &str) -> String {
    let base_class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_CUSTOM => "page page--custom",
        _ => "page",
    };

    if extra.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {extra}")
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "malformed page id: {page_id}");
    if !is_known_category(category) {
        log::warn!("page {} uses unknown category {}", page_id, category);
    }

    view! {
        <div
            id=page_id
            class=page_class(category, class)
            data-page-category=category
        >
            {children()}
        </div>
    }
}
