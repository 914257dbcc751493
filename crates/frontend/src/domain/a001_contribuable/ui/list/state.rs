use crate::shared::result_set::ResultSetModel;
use crate::shared::url_state;
use contracts::domain::a001_contribuable::{Contribuable, SearchCriteria};
use contracts::shared::from_query_params;
use leptos::prelude::*;

pub type ContribuableListModel = ResultSetModel<SearchCriteria, Contribuable>;

/// Состояние списка, восстановленное из адресной строки
pub fn create_state() -> RwSignal<ContribuableListModel> {
    let (criteria, page) = from_query_params::<SearchCriteria>(&url_state::read_query());
    log::debug!(
        "a001_contribuable: restored {} filters, page {}/{}",
        criteria.active_count(),
        page.index(),
        page.size()
    );
    RwSignal::new(ContribuableListModel::new(criteria, page))
}
