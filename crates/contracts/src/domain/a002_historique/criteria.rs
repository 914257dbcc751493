use crate::shared::query::{
    normalize_field, put_date, put_text, read_date, read_text, QueryCriteria, QueryParams,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const NIF: &str = "nif";
pub const UTILISATEUR: &str = "utilisateur";
pub const DATE_DEBUT: &str = "dateDebut";
pub const DATE_FIN: &str = "dateFin";

/// Фильтр журнала изменений
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoriqueCriteria {
    pub nif: Option<String>,
    pub utilisateur: Option<String>,
    pub date_debut: Option<NaiveDate>,
    pub date_fin: Option<NaiveDate>,
}

impl HistoriqueCriteria {
    pub fn normalized(&self) -> Self {
        Self {
            nif: normalize_field(&self.nif),
            utilisateur: normalize_field(&self.utilisateur),
            ..self.clone()
        }
    }
}

impl QueryCriteria for HistoriqueCriteria {
    fn write_params(&self, params: &mut QueryParams) {
        put_text(params, NIF, &self.nif);
        put_text(params, UTILISATEUR, &self.utilisateur);
        put_date(params, DATE_DEBUT, self.date_debut);
        put_date(params, DATE_FIN, self.date_fin);
    }

    fn read_params(params: &QueryParams) -> Self {
        Self {
            nif: read_text(params, NIF),
            utilisateur: read_text(params, UTILISATEUR),
            date_debut: read_date(params, DATE_DEBUT),
            date_fin: read_date(params, DATE_FIN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::paging::Page;
    use crate::shared::query::{from_query_params, raw_text, to_query_params};

    #[test]
    fn test_round_trip_with_partial_fields() {
        let criteria = HistoriqueCriteria {
            utilisateur: Some("Jean Dupont".into()),
            date_fin: NaiveDate::from_ymd_opt(2023, 6, 30),
            ..Default::default()
        };
        let params = to_query_params(&criteria, Page::new(4, 20));
        assert!(!params.contains_key(NIF));
        assert!(!params.contains_key(DATE_DEBUT));

        let (back, page) = from_query_params::<HistoriqueCriteria>(&params);
        assert_eq!(back, criteria);
        assert_eq!(page, Page::new(4, 20));
    }

    #[test]
    fn test_normalized_drops_blank_text_only() {
        let draft = HistoriqueCriteria {
            nif: raw_text(" ".to_string()),
            utilisateur: raw_text("Marie Martin ".to_string()),
            date_debut: NaiveDate::from_ymd_opt(2023, 1, 1),
            ..Default::default()
        };
        let submitted = draft.normalized();
        assert_eq!(submitted.nif, None);
        assert_eq!(submitted.utilisateur.as_deref(), Some("Marie Martin "));
        assert_eq!(submitted.date_debut, draft.date_debut);
    }
}
