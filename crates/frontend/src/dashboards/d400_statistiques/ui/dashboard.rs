use crate::dashboards::d400_statistiques::api;
use crate::layout::global_context::{use_global_context, Page};
use crate::layout::toast_service::use_toasts;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{format_thousands, StatCard, StatTone};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use contracts::dashboards::d400_statistiques::Statistiques;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Высота столбца в процентах от максимального месяца
fn bar_percent(value: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    f64::from(value) * 100.0 / f64::from(max)
}

/// Подсказки для карточек быстрого доступа
fn quick_access_hint(page: &Page) -> &'static str {
    match page {
        Page::Dashboard => "Vue d'ensemble de l'activité",
        Page::Import => "Importer un fichier Excel de dossiers",
        Page::Consultation => "Rechercher et exporter les dossiers",
        Page::Edition(_) => "Saisir un nouveau dossier",
        Page::Historique => "Suivre les modifications",
    }
}

#[component]
pub fn StatistiquesDashboard() -> impl IntoView {
    let ctx = use_global_context();
    let toasts = use_toasts();
    let api_base = use_config().api_base;

    let stats = RwSignal::new(None::<Statistiques>);
    let is_loading = RwSignal::new(true);

    spawn_local(async move {
        match api::get_statistiques(&api_base).await {
            Ok(data) => {
                log::debug!("d400: {} dossiers", data.total_dossiers);
                stats.try_set(Some(data));
            }
            Err(e) => toasts.error("Statistiques indisponibles", &e.to_string()),
        }
        is_loading.try_set(false);
    });

    let card = move |f: fn(&Statistiques) -> String| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(f)))
    };

    let chart = move || {
        stats.with(|s| {
            let Some(s) = s else {
                return view! {
                    <p class="text-muted">
                        {move || if is_loading.get() { "Chargement..." } else { "Aucune donnée" }}
                    </p>
                }
                .into_any();
            };
            let max = s.max_mensuel();
            s.performance_mensuelle
                .iter()
                .map(|p| {
                    let traites = format!("height: {:.1}%", bar_percent(p.traites, max));
                    let rejetes = format!("height: {:.1}%", bar_percent(p.rejetes, max));
                    view! {
                        <div class="bar-chart__group">
                            <div class="bar-chart__bars">
                                <div class="bar-chart__bar bar-chart__bar--ok" style=traites title=format!("{} traités", p.traites)></div>
                                <div class="bar-chart__bar bar-chart__bar--ko" style=rejetes title=format!("{} rejetés", p.rejetes)></div>
                            </div>
                            <span class="bar-chart__label">{p.mois.clone()}</span>
                        </div>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    let quick_pages = [Page::Import, Page::Consultation, Page::Edition(None), Page::Historique];

    view! {
        <div class="page">
            <PageHeader title="Tableau de bord" subtitle="Suivi du traitement des dossiers".to_string() />

            <div class="stat-grid">
                <StatCard
                    label="Total des dossiers"
                    icon_name="file-text"
                    value=card(|s| format_thousands(s.total_dossiers))
                    tone=StatTone::Neutral
                />
                <StatCard
                    label="En cours"
                    icon_name="clock"
                    value=card(|s| format_thousands(s.dossiers_en_cours))
                    tone=StatTone::Info
                />
                <StatCard
                    label="Livrés"
                    icon_name="check"
                    value=card(|s| format_thousands(s.dossiers_livres))
                    tone=StatTone::Success
                    subtitle=card(|s| format!("Délai moyen : {:.1} jours", s.delai_moyen_traitement))
                />
                <StatCard
                    label="Rejetés"
                    icon_name="x-circle"
                    value=card(|s| format_thousands(s.dossiers_rejetes))
                    tone=StatTone::Error
                    subtitle=card(|s| format!("Taux de rejet : {:.1} %", s.taux_rejet()))
                />
            </div>

            <section class="chart-card">
                <h2 class="form-section__title">"Performance mensuelle"</h2>
                <div class="bar-chart">{chart}</div>
                <div class="bar-chart__legend">
                    <span class="legend legend--ok">"Traités"</span>
                    <span class="legend legend--ko">"Rejetés"</span>
                </div>
            </section>

            <section class="quick-access">
                {quick_pages
                    .into_iter()
                    .map(|page| {
                        let hint = quick_access_hint(&page);
                        let label = page.label();
                        let icon_name = page.icon();
                        view! {
                            <button class="quick-access__card" on:click=move |_| ctx.navigate(page.clone())>
                                {icon(icon_name)}
                                <strong>{label}</strong>
                                <span class="text-muted">{hint}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(84, 168), 50.0);
        assert_eq!(bar_percent(168, 168), 100.0);
        assert_eq!(bar_percent(5, 0), 0.0);
    }
}
