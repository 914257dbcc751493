//! TopHeader component - верхняя панель: переключатель меню и заголовок.

use crate::layout::global_context::{use_global_context, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let current_title = move || ctx.active.with(|page| page.label());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if ctx.left_open.get() { "Masquer le menu" } else { "Afficher le menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Suivi des contribuables"</span>
                <span class="top-header__page">{current_title}</span>
            </div>

            <div class="top-header__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate(Page::Edition(None))
                >
                    "Nouveau dossier"
                </Button>
            </div>
        </div>
    }
}
