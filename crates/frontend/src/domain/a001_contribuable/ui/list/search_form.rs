use crate::shared::components::date_input::DateInput;
use contracts::domain::a001_contribuable::{DateField, SearchCriteria};
use contracts::shared::query::raw_text;
use contracts::shared::wire::{flag_label, parse_flag};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Значение select'а "Tous / Oui / Non"
fn flag_option(value: Option<bool>) -> String {
    value.map(|v| flag_label(v).to_string()).unwrap_or_default()
}

fn parse_quantity(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

/// Форма поиска досье.
///
/// Работает с черновиком критериев; наружу уходит только по "Rechercher".
/// Текст в черновике хранится как введён, нормализуется при отправке.
#[component]
pub fn SearchForm(
    /// Критерии, с которых начинается форма (восстановленные из адреса)
    initial: SearchCriteria,
    on_search: Callback<SearchCriteria>,
    on_reset: Callback<()>,
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    let draft = RwSignal::new(initial);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_search.run(draft.with_untracked(SearchCriteria::normalized));
    };

    let handle_reset = move |_: leptos::ev::MouseEvent| {
        draft.set(SearchCriteria::default());
        on_reset.run(());
    };

    view! {
        <form class="search-form" on:submit=handle_submit>
            <div class="search-form__grid">
                <div class="form-group">
                    <label for="nif">"NIF"</label>
                    <input
                        type="text"
                        id="nif"
                        class="form-input"
                        placeholder="Numéro d'identification fiscale"
                        prop:value=move || draft.with(|c| c.nif.clone().unwrap_or_default())
                        on:input=move |ev| draft.update(|c| c.nif = raw_text(event_target_value(&ev)))
                    />
                </div>

                <div class="form-group">
                    <label for="raisonSociale">"Raison sociale"</label>
                    <input
                        type="text"
                        id="raisonSociale"
                        class="form-input"
                        prop:value=move || draft.with(|c| c.raison_sociale.clone().unwrap_or_default())
                        on:input=move |ev| draft.update(|c| c.raison_sociale = raw_text(event_target_value(&ev)))
                    />
                </div>

                <div class="form-group">
                    <label for="centreGestionnaire">"Centre gestionnaire"</label>
                    <input
                        type="text"
                        id="centreGestionnaire"
                        class="form-input"
                        prop:value=move || draft.with(|c| c.centre_gestionnaire.clone().unwrap_or_default())
                        on:input=move |ev| draft.update(|c| c.centre_gestionnaire = raw_text(event_target_value(&ev)))
                    />
                </div>

                <div class="form-group">
                    <label for="documents">"Documents"</label>
                    <input
                        type="text"
                        id="documents"
                        class="form-input"
                        prop:value=move || draft.with(|c| c.documents.clone().unwrap_or_default())
                        on:input=move |ev| draft.update(|c| c.documents = raw_text(event_target_value(&ev)))
                    />
                </div>

                <div class="form-group">
                    <label for="aJour">"À jour"</label>
                    <select
                        id="aJour"
                        class="form-select"
                        prop:value=move || draft.with(|c| flag_option(c.a_jour))
                        on:change=move |ev| draft.update(|c| c.a_jour = parse_flag(&event_target_value(&ev)).ok())
                    >
                        <option value="">"Tous"</option>
                        <option value="Oui">"Oui"</option>
                        <option value="Non">"Non"</option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="rejet">"Rejet"</label>
                    <select
                        id="rejet"
                        class="form-select"
                        prop:value=move || draft.with(|c| flag_option(c.rejet))
                        on:change=move |ev| draft.update(|c| c.rejet = parse_flag(&event_target_value(&ev)).ok())
                    >
                        <option value="">"Tous"</option>
                        <option value="Oui">"Oui"</option>
                        <option value="Non">"Non"</option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="quantiteMin">"Quantité min"</label>
                    <input
                        type="number"
                        min="0"
                        id="quantiteMin"
                        class="form-input"
                        prop:value=move || draft.with(|c| c.quantite_min.map(|q| q.to_string()).unwrap_or_default())
                        on:input=move |ev| draft.update(|c| c.quantite_min = parse_quantity(&event_target_value(&ev)))
                    />
                </div>

                <div class="form-group">
                    <label for="quantiteMax">"Quantité max"</label>
                    <input
                        type="number"
                        min="0"
                        id="quantiteMax"
                        class="form-input"
                        prop:value=move || draft.with(|c| c.quantite_max.map(|q| q.to_string()).unwrap_or_default())
                        on:input=move |ev| draft.update(|c| c.quantite_max = parse_quantity(&event_target_value(&ev)))
                    />
                </div>

                <div class="form-group">
                    <label for="dateType">"Type de date"</label>
                    <select
                        id="dateType"
                        class="form-select"
                        prop:value=move || draft.with(|c| c.date_type.map(|f| f.as_param().to_string()).unwrap_or_default())
                        on:change=move |ev| draft.update(|c| c.date_type = DateField::from_param(&event_target_value(&ev)).ok())
                    >
                        <option value="">"Aucun"</option>
                        {DateField::ALL
                            .into_iter()
                            .map(|f| view! { <option value=f.as_param()>{f.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="dateDebut">"Date début"</label>
                    <DateInput
                        id="dateDebut"
                        value=Signal::derive(move || draft.with(|c| c.date_debut))
                        on_change=Callback::new(move |d| draft.update(|c| c.date_debut = d))
                    />
                </div>

                <div class="form-group">
                    <label for="dateFin">"Date fin"</label>
                    <DateInput
                        id="dateFin"
                        value=Signal::derive(move || draft.with(|c| c.date_fin))
                        on_change=Callback::new(move |d| draft.update(|c| c.date_fin = d))
                    />
                </div>
            </div>

            <div class="search-form__actions">
                <span class="search-form__count">
                    {move || match draft.with(SearchCriteria::active_count) {
                        0 => String::new(),
                        1 => "1 filtre".to_string(),
                        n => format!("{} filtres", n),
                    }}
                </span>
                <Button appearance=ButtonAppearance::Secondary on_click=handle_reset>
                    "Réinitialiser"
                </Button>
                <button type="submit" class="btn btn--primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Recherche..." } else { "Rechercher" }}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_option() {
        assert_eq!(flag_option(None), "");
        assert_eq!(flag_option(Some(true)), "Oui");
        assert_eq!(parse_flag(&flag_option(Some(false))).ok(), Some(false));
        assert_eq!(parse_flag(&flag_option(None)).ok(), None);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 12 "), Some(12));
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("-3"), None);
    }
}
