use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::ToastService;
use crate::layout::Shell;
use crate::shared::config::{provide_config, ConsoleConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = ConsoleConfig::from_window();
    let toast_timeout_ms = config.toast_timeout_ms;
    provide_config(config);

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    // Активная страница берётся из ?active=... один раз при старте
    ctx.init_router_integration();
    provide_context(ctx);

    provide_context(ToastService::new(toast_timeout_ms));

    view! {
        <Shell />
    }
}
