pub mod state;

use self::state::create_state;
use crate::domain::a002_historique::api;
use crate::layout::global_context::Page;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::date_utils::{format_datetime, EMPTY_CELL};
use crate::shared::list_query::run_query;
use contracts::domain::a002_historique::{HistoriqueCriteria, HistoriqueEntree};
use contracts::shared::query::raw_text;
use leptos::prelude::*;

const COLUMNS: [&str; 7] = [
    "Date",
    "NIF",
    "Contribuable",
    "Utilisateur",
    "Champ modifié",
    "Ancienne valeur",
    "Nouvelle valeur",
];

/// Ячейки строки журнала в порядке `COLUMNS`
fn entry_cells(entry: &HistoriqueEntree) -> [String; 7] {
    let value = |v: &Option<String>| {
        v.as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(EMPTY_CELL)
            .to_string()
    };
    [
        format_datetime(&entry.date_modification),
        entry.nif.clone(),
        entry.nom_contribuable.clone(),
        entry.utilisateur.clone(),
        entry.champ_modifie.clone(),
        value(&entry.ancienne_valeur),
        value(&entry.nouvelle_valeur),
    ]
}

/// Журнал изменений досье
#[component]
pub fn HistoriqueList() -> impl IntoView {
    let toasts = use_toasts();
    let config = use_config();
    let state = create_state();
    let api_base = StoredValue::new(config.api_base.clone());
    let page_key = Page::Historique.key();

    let draft = RwSignal::new(state.with_untracked(|m| m.criteria().clone()));

    let load = move || {
        let base = api_base.get_value();
        run_query(state, page_key, toasts, move |params| async move {
            api::fetch_page(&base, params).await
        });
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.update(|m| m.set_criteria(draft.with_untracked(HistoriqueCriteria::normalized)));
        load();
    };

    let handle_reset = move |_| {
        draft.set(HistoriqueCriteria::default());
        state.update(|m| m.set_criteria(HistoriqueCriteria::default()));
        load();
    };

    let loading = Signal::derive(move || state.with(|m| m.is_loading()));

    let body = move || {
        if loading.get() && state.with(|m| m.rows().is_empty()) {
            return view! {
                <tr><td class="table-empty" colspan=COLUMNS.len().to_string()>"Chargement..."</td></tr>
            }
            .into_any();
        }
        let rows = state.with(|m| m.rows().to_vec());
        if rows.is_empty() {
            return view! {
                <tr><td class="table-empty" colspan=COLUMNS.len().to_string()>"Aucune modification trouvée"</td></tr>
            }
            .into_any();
        }
        rows.iter()
            .map(|entry| {
                let cells = entry_cells(entry);
                view! {
                    <tr>
                        {cells.into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    load();

    view! {
        <div class="page">
            <PageHeader title="Historique des modifications" />

            <form class="search-form" on:submit=handle_submit>
                <div class="search-form__grid">
                    <div class="form-group">
                        <label for="histNif">"NIF"</label>
                        <input
                            type="text"
                            id="histNif"
                            class="form-input"
                            prop:value=move || draft.with(|c| c.nif.clone().unwrap_or_default())
                            on:input=move |ev| draft.update(|c| c.nif = raw_text(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for="histUtilisateur">"Utilisateur"</label>
                        <input
                            type="text"
                            id="histUtilisateur"
                            class="form-input"
                            prop:value=move || draft.with(|c| c.utilisateur.clone().unwrap_or_default())
                            on:input=move |ev| draft.update(|c| c.utilisateur = raw_text(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for="histDateDebut">"Du"</label>
                        <DateInput
                            id="histDateDebut"
                            value=Signal::derive(move || draft.with(|c| c.date_debut))
                            on_change=Callback::new(move |d| draft.update(|c| c.date_debut = d))
                        />
                    </div>
                    <div class="form-group">
                        <label for="histDateFin">"Au"</label>
                        <DateInput
                            id="histDateFin"
                            value=Signal::derive(move || draft.with(|c| c.date_fin))
                            on_change=Callback::new(move |d| draft.update(|c| c.date_fin = d))
                        />
                    </div>
                </div>
                <div class="search-form__actions">
                    <button type="button" class="btn btn--secondary" on:click=handle_reset>"Réinitialiser"</button>
                    <button type="submit" class="btn btn--primary" disabled=move || loading.get()>"Filtrer"</button>
                </div>
            </form>

            <div class="table-container">
                <table class="data-table">
                    <thead>
                        <tr>
                            {COLUMNS.into_iter().map(|c| view! { <th>{c}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|m| m.footer().page.index()))
                total_pages=Signal::derive(move || state.with(|m| m.footer().total_pages))
                total_count=Signal::derive(move || state.with(|m| m.footer().total))
                page_size=Signal::derive(move || state.with(|m| m.footer().page.size()))
                sibling_count=config.sibling_count
                on_page_change=Callback::new(move |index: u32| {
                    state.update(|m| m.go_to_page(index));
                    load();
                })
                on_page_size_change=Callback::new(move |size: u32| {
                    state.update(|m| m.set_page_size(size));
                    load();
                })
                page_size_options=config.page_size_options.clone()
            />
        </div>
    }
}
