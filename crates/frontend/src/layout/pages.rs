//! Страница для каждого пункта навигации
use crate::dashboards::d400_statistiques::StatistiquesDashboard;
use crate::domain::a001_contribuable::ui::details::ContribuableDetails;
use crate::domain::a001_contribuable::ui::list::ContribuableList;
use crate::domain::a002_historique::ui::list::HistoriqueList;
use crate::layout::global_context::Page;
use crate::usecases::u501_import_excel::ImportExcelPage;
use leptos::prelude::*;

pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <StatistiquesDashboard /> }.into_any(),
        Page::Import => view! { <ImportExcelPage /> }.into_any(),
        Page::Consultation => view! { <ContribuableList /> }.into_any(),
        Page::Edition(id) => view! { <ContribuableDetails id=id /> }.into_any(),
        Page::Historique => view! { <HistoriqueList /> }.into_any(),
    }
}
