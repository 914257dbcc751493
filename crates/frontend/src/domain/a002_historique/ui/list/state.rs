use crate::shared::result_set::ResultSetModel;
use crate::shared::url_state;
use contracts::domain::a002_historique::{HistoriqueCriteria, HistoriqueEntree};
use contracts::shared::from_query_params;
use leptos::prelude::*;

pub type HistoriqueListModel = ResultSetModel<HistoriqueCriteria, HistoriqueEntree>;

pub fn create_state() -> RwSignal<HistoriqueListModel> {
    let (criteria, page) = from_query_params::<HistoriqueCriteria>(&url_state::read_query());
    RwSignal::new(HistoriqueListModel::new(criteria, page))
}
