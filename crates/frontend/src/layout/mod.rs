pub mod center;
pub mod global_context;
pub mod left;
pub mod pages;
pub mod toast_service;
pub mod top_header;

use leptos::prelude::*;
use toast_service::Toaster;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// |   (Left)  |          (Center)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>

                <div class="app-main">
                    <center::Center />
                </div>
            </div>

            <Toaster />
        </div>
    }
}
