use super::model::{CENTRES, MOTIFS_REJET};
use super::view_model::DossierDetailsViewModel;
use crate::layout::global_context::use_global_context;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Сообщение проверки под полем
fn field_message(message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|m| view! { <p class="form-error">{m}</p> })
}

/// Форма досье: создание (`id == None`) или редактирование
#[component]
pub fn ContribuableDetails(id: Option<String>) -> impl IntoView {
    let vm = DossierDetailsViewModel::new(
        id,
        use_config().api_base,
        use_toasts(),
        use_global_context(),
    );
    vm.load();

    let draft = vm.draft;
    let title = if vm.is_edit_mode() {
        "Modifier le dossier"
    } else {
        "Nouveau dossier"
    };
    let days = move || draft.with(|d| d.days_in_treatment());
    let busy = Signal::derive(move || vm.is_loading.get() || vm.is_saving.get());

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command();
    };

    view! {
        <div class="page">
            <PageHeader title=title>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel_command()>
                    "Annuler"
                </Button>
            </PageHeader>

            {move || vm.load_error.get().map(|e| view! {
                <div class="alert alert--error">{icon("x-circle")}<span>{e}</span></div>
            })}

            <form
                class=move || if vm.is_loading.get() { "dossier-form dossier-form--busy" } else { "dossier-form" }
                on:submit=handle_submit
            >
                <section class="form-section">
                    <h2 class="form-section__title">"Contribuable"</h2>
                    <div class="form-grid">
                        <div class="form-group">
                            <label for="nif">"NIF *"</label>
                            <input
                                type="text"
                                id="nif"
                                class="form-input"
                                prop:value=move || draft.with(|d| d.nif.clone())
                                on:input=move |ev| draft.update(|d| d.nif = event_target_value(&ev))
                            />
                            {field_message(vm.field_error("nif"))}
                        </div>

                        <div class="form-group">
                            <label for="raisonSociale">"Raison sociale *"</label>
                            <input
                                type="text"
                                id="raisonSociale"
                                class="form-input"
                                prop:value=move || draft.with(|d| d.raison_sociale.clone())
                                on:input=move |ev| draft.update(|d| d.raison_sociale = event_target_value(&ev))
                            />
                            {field_message(vm.field_error("raisonSociale"))}
                        </div>

                        <div class="form-group">
                            <label for="centreGestionnaire">"Centre gestionnaire *"</label>
                            <select
                                id="centreGestionnaire"
                                class="form-select"
                                prop:value=move || draft.with(|d| d.centre_gestionnaire.clone())
                                on:change=move |ev| draft.update(|d| d.centre_gestionnaire = event_target_value(&ev))
                            >
                                <option value="">"Sélectionner un centre"</option>
                                {CENTRES
                                    .into_iter()
                                    .map(|c| view! { <option value=c>{c}</option> })
                                    .collect_view()}
                            </select>
                            {field_message(vm.field_error("centreGestionnaire"))}
                        </div>

                        <div class="form-group">
                            <label for="documents">"Documents"</label>
                            <input
                                type="text"
                                id="documents"
                                class="form-input"
                                prop:value=move || draft.with(|d| d.documents.clone())
                                on:input=move |ev| draft.update(|d| d.documents = event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label for="quantite">"Quantité"</label>
                            <input
                                type="number"
                                min="0"
                                id="quantite"
                                class="form-input"
                                prop:value=move || draft.with(|d| d.quantite.to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev).trim().parse().unwrap_or(0);
                                    draft.update(|d| d.quantite = value);
                                }
                            />
                        </div>

                        <div class="form-group form-group--inline">
                            <input
                                type="checkbox"
                                id="aJour"
                                prop:checked=move || draft.with(|d| d.a_jour)
                                on:change=move |ev| draft.update(|d| d.a_jour = event_target_checked(&ev))
                            />
                            <label for="aJour">"À jour"</label>
                        </div>
                    </div>
                </section>

                <section class="form-section">
                    <h2 class="form-section__title">"Traitement"</h2>
                    <div class="form-grid">
                        <div class="form-group">
                            <label for="dateDepot">"Date de dépôt"</label>
                            <DateInput
                                id="dateDepot"
                                value=Signal::derive(move || draft.with(|d| d.date_depot))
                                on_change=Callback::new(move |v| draft.update(|d| d.date_depot = v))
                                disabled=busy
                            />
                        </div>

                        <div class="form-group">
                            <label for="dateArriveeImmat">"Date d'arrivée Immat *"</label>
                            <DateInput
                                id="dateArriveeImmat"
                                value=Signal::derive(move || draft.with(|d| d.date_arrivee_immat))
                                on_change=Callback::new(move |v| draft.update(|d| d.date_arrivee_immat = v))
                                disabled=busy
                            />
                            {field_message(vm.field_error("dateArriveeImmat"))}
                        </div>

                        <div class="form-group">
                            <label for="dateLivraisonSG">"Date de livraison SG"</label>
                            <DateInput
                                id="dateLivraisonSG"
                                value=Signal::derive(move || draft.with(|d| d.date_livraison_sg))
                                on_change=Callback::new(move |v| draft.update(|d| d.date_livraison_sg = v))
                                disabled=busy
                            />
                        </div>

                        <div class="form-group">
                            <span class="form-label">"Jours de traitement"</span>
                            <div class="days-counter">
                                {icon("clock")}
                                <strong>{days}</strong>
                                " jour(s)"
                            </div>
                        </div>
                    </div>
                </section>

                <section class="form-section">
                    <h2 class="form-section__title">"Rejet"</h2>
                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="rejet"
                            prop:checked=move || draft.with(|d| d.rejet)
                            on:change=move |ev| draft.update(|d| d.rejet = event_target_checked(&ev))
                        />
                        <label for="rejet">"Dossier rejeté"</label>
                    </div>

                    <Show when=move || draft.with(|d| d.rejet)>
                        <div class="form-grid">
                            <div class="form-group">
                                <label for="motifRejet">"Motif de rejet"</label>
                                <select
                                    id="motifRejet"
                                    class="form-select"
                                    prop:value=move || draft.with(|d| d.motif_rejet.clone())
                                    on:change=move |ev| draft.update(|d| d.motif_rejet = event_target_value(&ev))
                                >
                                    <option value="">"Sélectionner un motif"</option>
                                    {MOTIFS_REJET
                                        .into_iter()
                                        .map(|m| view! { <option value=m>{m}</option> })
                                        .collect_view()}
                                </select>
                            </div>

                            <div class="form-group">
                                <label for="dateRejet">"Date de rejet"</label>
                                <DateInput
                                    id="dateRejet"
                                    value=Signal::derive(move || draft.with(|d| d.date_rejet))
                                    on_change=Callback::new(move |v| draft.update(|d| d.date_rejet = v))
                                />
                            </div>
                        </div>
                    </Show>
                </section>

                <section class="form-section">
                    <label for="observation">"Observation"</label>
                    <textarea
                        id="observation"
                        class="form-textarea"
                        rows="3"
                        prop:value=move || draft.with(|d| d.observation.clone())
                        on:input=move |ev| draft.update(|d| d.observation = event_target_value(&ev))
                    ></textarea>
                </section>

                <div class="form-actions">
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        {move || if vm.is_saving.get() { "Enregistrement..." } else { "Enregistrer" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
