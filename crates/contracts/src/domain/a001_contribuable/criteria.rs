use crate::shared::error::ContractError;
use crate::shared::query::{
    normalize_field, put_date, put_flag, put_text, put_u32, read_date, read_flag, read_text,
    read_u32, QueryCriteria, QueryParams,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const NIF: &str = "nif";
pub const RAISON_SOCIALE: &str = "raisonSociale";
pub const CENTRE_GESTIONNAIRE: &str = "centreGestionnaire";
pub const DOCUMENTS: &str = "documents";
pub const A_JOUR: &str = "aJour";
pub const REJET: &str = "rejet";
pub const QUANTITE_MIN: &str = "quantiteMin";
pub const QUANTITE_MAX: &str = "quantiteMax";
pub const DATE_TYPE: &str = "dateType";
pub const DATE_DEBUT: &str = "dateDebut";
pub const DATE_FIN: &str = "dateFin";

/// По какой из дат досье фильтровать период
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateField {
    #[serde(rename = "dateDepot")]
    DateDepot,
    #[serde(rename = "dateArriveeImmat")]
    DateArriveeImmat,
    #[serde(rename = "dateLivraisonSG")]
    DateLivraisonSg,
}

impl DateField {
    pub const ALL: [DateField; 3] = [
        DateField::DateDepot,
        DateField::DateArriveeImmat,
        DateField::DateLivraisonSg,
    ];

    pub fn as_param(&self) -> &'static str {
        match self {
            DateField::DateDepot => "dateDepot",
            DateField::DateArriveeImmat => "dateArriveeImmat",
            DateField::DateLivraisonSg => "dateLivraisonSG",
        }
    }

    pub fn from_param(value: &str) -> Result<Self, ContractError> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_param() == value.trim())
            .ok_or_else(|| ContractError::UnknownDateField(value.to_string()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateField::DateDepot => "Date de dépôt",
            DateField::DateArriveeImmat => "Date d'arrivée Immat",
            DateField::DateLivraisonSg => "Date de livraison SG",
        }
    }
}

/// Критерии поиска досье. Любое поле может отсутствовать,
/// отсутствие означает "без ограничения", а не "пустое значение".
///
/// `quantite_min <= quantite_max` не проверяется: бэкенд получает
/// диапазон как есть.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub nif: Option<String>,
    pub raison_sociale: Option<String>,
    pub centre_gestionnaire: Option<String>,
    pub documents: Option<String>,
    pub a_jour: Option<bool>,
    pub rejet: Option<bool>,
    pub quantite_min: Option<u32>,
    pub quantite_max: Option<u32>,
    pub date_type: Option<DateField>,
    pub date_debut: Option<NaiveDate>,
    pub date_fin: Option<NaiveDate>,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Критерии из черновика формы: текстовые поля из одних пробелов
    /// становятся отсутствующими, остальное без изменений
    pub fn normalized(&self) -> Self {
        Self {
            nif: normalize_field(&self.nif),
            raison_sociale: normalize_field(&self.raison_sociale),
            centre_gestionnaire: normalize_field(&self.centre_gestionnaire),
            documents: normalize_field(&self.documents),
            ..self.clone()
        }
    }

    /// Число заданных фильтров (для бейджа на панели фильтров)
    pub fn active_count(&self) -> usize {
        let mut params = QueryParams::new();
        self.write_params(&mut params);
        params.len()
    }
}

impl QueryCriteria for SearchCriteria {
    fn write_params(&self, params: &mut QueryParams) {
        put_text(params, NIF, &self.nif);
        put_text(params, RAISON_SOCIALE, &self.raison_sociale);
        put_text(params, CENTRE_GESTIONNAIRE, &self.centre_gestionnaire);
        put_text(params, DOCUMENTS, &self.documents);
        put_flag(params, A_JOUR, self.a_jour);
        put_flag(params, REJET, self.rejet);
        put_u32(params, QUANTITE_MIN, self.quantite_min);
        put_u32(params, QUANTITE_MAX, self.quantite_max);
        if let Some(field) = self.date_type {
            params.insert(DATE_TYPE.to_string(), field.as_param().to_string());
        }
        put_date(params, DATE_DEBUT, self.date_debut);
        put_date(params, DATE_FIN, self.date_fin);
    }

    fn read_params(params: &QueryParams) -> Self {
        Self {
            nif: read_text(params, NIF),
            raison_sociale: read_text(params, RAISON_SOCIALE),
            centre_gestionnaire: read_text(params, CENTRE_GESTIONNAIRE),
            documents: read_text(params, DOCUMENTS),
            a_jour: read_flag(params, A_JOUR),
            rejet: read_flag(params, REJET),
            quantite_min: read_u32(params, QUANTITE_MIN),
            quantite_max: read_u32(params, QUANTITE_MAX),
            date_type: params
                .get(DATE_TYPE)
                .and_then(|v| DateField::from_param(v).ok()),
            date_debut: read_date(params, DATE_DEBUT),
            date_fin: read_date(params, DATE_FIN),
        }
    }
}
