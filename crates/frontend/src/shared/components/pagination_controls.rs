use crate::shared::icons::icon;
use crate::shared::pagination::{
    navigation_enabled, pagination_summary, pagination_window, PageItem,
};
use leptos::prelude::*;

/// PaginationControls component - окно страниц, "назад/вперёд" и размер страницы
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<u32>,

    /// Соседей по обе стороны от текущей страницы
    sibling_count: u32,

    /// Callback when page changes
    on_page_change: Callback<u32>,

    /// Callback when page size changes
    on_page_size_change: Callback<u32>,

    page_size_options: Vec<u32>,
) -> impl IntoView {
    let disabled = move || !navigation_enabled(total_pages.get());
    let fallback_size = page_size_options.first().copied().unwrap_or(10);

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || {
                    pagination_summary(current_page.get(), total_pages.get(), total_count.get())
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || { disabled() || current_page.get() <= 1 }
                title="Page précédente"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                pagination_window(current, total_pages.get(), sibling_count)
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(n) => view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active=n == current
                                disabled=disabled
                                on:click=move |_| on_page_change.run(n)
                            >
                                {n.to_string()}
                            </button>
                        }
                        .into_any(),
                        PageItem::Gap => view! { <span class="pagination-gap">"..."</span> }.into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || { disabled() || current_page.get() >= total_pages.get() }
                title="Page suivante"
            >
                {icon("chevron-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(fallback_size);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
