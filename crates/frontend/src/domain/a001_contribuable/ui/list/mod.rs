pub mod search_form;
pub mod state;
pub mod table;

use self::search_form::SearchForm;
use self::state::create_state;
use self::table::ContribuableTable;
use crate::domain::a001_contribuable::api;
use crate::layout::global_context::{use_global_context, Page};
use crate::layout::toast_service::use_toasts;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::export::{export_rows, ExportFormat};
use crate::shared::icons::icon;
use crate::shared::list_query::run_query;
use crate::shared::result_set::LoadState;
use contracts::domain::a001_contribuable::SearchCriteria;
use leptos::prelude::*;

const EXPORT_TITLE: &str = "Liste des contribuables";

/// Консультация досье: поиск, таблица, пагинация и экспорт текущей страницы
#[component]
pub fn ContribuableList() -> impl IntoView {
    let ctx = use_global_context();
    let toasts = use_toasts();
    let config = use_config();
    let state = create_state();

    let api_base = StoredValue::new(config.api_base.clone());
    let page_key = Page::Consultation.key();

    let load = move || {
        let base = api_base.get_value();
        run_query(state, page_key, toasts, move |params| async move {
            api::fetch_page(&base, params).await
        });
    };

    let handle_search = Callback::new(move |criteria: SearchCriteria| {
        state.update(|m| m.set_criteria(criteria));
        load();
    });

    let handle_reset = Callback::new(move |_: ()| {
        state.update(|m| m.set_criteria(SearchCriteria::default()));
        load();
    });

    let handle_page_change = Callback::new(move |index: u32| {
        state.update(|m| m.go_to_page(index));
        load();
    });

    let handle_page_size_change = Callback::new(move |size: u32| {
        state.update(|m| m.set_page_size(size));
        load();
    });

    let handle_edit = Callback::new(move |id: String| {
        ctx.navigate(Page::Edition(Some(id)));
    });

    let export_prefix = config.export_prefix;
    let pdf_rows_per_page = config.pdf_rows_per_page;
    let handle_export = move |format: ExportFormat| {
        let result = state.with_untracked(|m| {
            export_rows(m.rows(), EXPORT_TITLE, export_prefix, format, pdf_rows_per_page)
        });
        match result {
            Ok(filename) => toasts.success("Export réussi", &filename),
            Err(e) => toasts.error("Erreur d'export", &e.to_string()),
        }
    };

    let rows = Signal::derive(move || state.with(|m| m.rows().to_vec()));
    let loading = Signal::derive(move || state.with(|m| m.is_loading()));
    let no_rows = move || state.with(|m| m.rows().is_empty());
    let error = move || match state.with(|m| m.state().clone()) {
        LoadState::Failed(message) => Some(message),
        _ => None,
    };

    let subtitle = Signal::derive(move || {
        state.with(|m| m.result().map(|r| format!("{} dossier(s)", r.total)))
    });

    load();

    view! {
        <div class="page">
            <PageHeader title="Consultation des dossiers" subtitle=subtitle>
                <button
                    class="btn btn--secondary"
                    disabled=no_rows
                    on:click=move |_| handle_export(ExportFormat::Xlsx)
                >
                    {icon("excel")}
                    "Excel"
                </button>
                <button
                    class="btn btn--secondary"
                    disabled=no_rows
                    on:click=move |_| handle_export(ExportFormat::Pdf)
                >
                    {icon("file-text")}
                    "PDF"
                </button>
            </PageHeader>

            <SearchForm
                initial=state.with_untracked(|m| m.criteria().clone())
                on_search=handle_search
                on_reset=handle_reset
                loading=loading
            />

            {move || error().map(|message| view! {
                <div class="alert alert--error">
                    <span>{message}</span>
                    <button class="btn btn--link" on:click=move |_| load()>"Réessayer"</button>
                </div>
            })}

            <ContribuableTable rows=rows loading=loading on_edit=handle_edit />

            <PaginationControls
                current_page=Signal::derive(move || state.with(|m| m.footer().page.index()))
                total_pages=Signal::derive(move || state.with(|m| m.footer().total_pages))
                total_count=Signal::derive(move || state.with(|m| m.footer().total))
                page_size=Signal::derive(move || state.with(|m| m.footer().page.size()))
                sibling_count=config.sibling_count
                on_page_change=handle_page_change
                on_page_size_change=handle_page_size_change
                page_size_options=config.page_size_options.clone()
            />
        </div>
    }
}
