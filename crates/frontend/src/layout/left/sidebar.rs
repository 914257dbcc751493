//! Боковое меню консоли

use crate::layout::global_context::{use_global_context, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <nav class="app-sidebar__content">
            {Page::MENU
                .into_iter()
                .map(|page| {
                    let target = page.clone();
                    let is_active = {
                        let page = page.clone();
                        move || ctx.active.with(|active| active.menu_group() == page)
                    };
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=is_active
                            on:click=move |_| ctx.navigate(target.clone())
                        >
                            <span class="app-sidebar__icon">{icon(page.icon())}</span>
                            <span class="app-sidebar__label">{page.label()}</span>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
