use crate::layout::global_context::use_global_context;
use crate::layout::pages::render_page;
use leptos::prelude::*;

/// Центральная зона: активная страница
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {move || {
                let page = ctx.active.get();
                leptos::logging::log!("center: render '{}'", page.key());
                render_page(page)
            }}
        </div>
    }
}
