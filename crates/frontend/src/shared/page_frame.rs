//! PageFrame — standard root wrapper for every routed page.
//!
//! Sets `id` (`"{entity}--{category}"`, e.g. `"a001_stock_item--lookup"`)
//! and `data-page-category` on the root element.

use leptos::prelude::*;

pub const PAGE_CAT_LOOKUP: &str = "lookup";
pub const PAGE_CAT_USECASE: &str = "usecase";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    /// Page heading
    title: &'static str,
    /// Optional subtitle under the heading
    #[prop(optional)]
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_LOOKUP => "page page--narrow",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
                {(!subtitle.is_empty()).then(|| view! { <p class="page__subtitle">{subtitle}</p> })}
            </div>
            <div class="page__content">{children()}</div>
        </div>
    }
}
