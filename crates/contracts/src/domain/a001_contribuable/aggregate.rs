use crate::shared::wire::{opt_date, yes_no};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Число дней обработки досье: от даты поступления в Immat до даты
/// выдачи в SG.
///
/// Если одной из дат нет, результат 0 ("ещё не определено").
/// Выдача раньше поступления считается ошибкой ввода и тоже даёт 0.
pub fn days_in_treatment(arrival: Option<NaiveDate>, delivery: Option<NaiveDate>) -> u32 {
    match (arrival, delivery) {
        (Some(arrival), Some(delivery)) => {
            let days = delivery.signed_duration_since(arrival).num_days().max(0);
            u32::try_from(days).unwrap_or(u32::MAX)
        }
        _ => 0,
    }
}

/// Досье налогоплательщика, как его отдаёт `GET /api/contribuables`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribuable {
    pub id: String,
    pub nif: String,
    pub raison_sociale: String,
    #[serde(default)]
    pub centre_gestionnaire: String,
    #[serde(default)]
    pub documents: String,
    #[serde(default)]
    pub quantite: u32,
    #[serde(with = "yes_no", default)]
    pub a_jour: bool,
    #[serde(with = "yes_no", default)]
    pub rejet: bool,
    #[serde(with = "opt_date", default)]
    pub date_rejet: Option<NaiveDate>,
    #[serde(default)]
    pub motif_rejet: Option<String>,
    #[serde(with = "opt_date", default)]
    pub date_depot: Option<NaiveDate>,
    #[serde(with = "opt_date", default)]
    pub date_arrivee_immat: Option<NaiveDate>,
    #[serde(rename = "dateLivraisonSG", with = "opt_date", default)]
    pub date_livraison_sg: Option<NaiveDate>,
    #[serde(default)]
    pub observation: Option<String>,
}

impl Contribuable {
    /// Производное поле "Jours de traitement"; значение бэкенда не используется
    pub fn days_in_treatment(&self) -> u32 {
        days_in_treatment(self.date_arrivee_immat, self.date_livraison_sg)
    }
}

/// Тело запроса `POST/PUT /api/contribuables`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DossierPayload {
    pub nif: String,
    pub raison_sociale: String,
    pub centre_gestionnaire: String,
    pub documents: String,
    pub quantite: u32,
    #[serde(with = "yes_no")]
    pub a_jour: bool,
    #[serde(with = "yes_no")]
    pub rejet: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub motif_rejet: Option<String>,
    #[serde(with = "opt_date", skip_serializing_if = "Option::is_none", default)]
    pub date_rejet: Option<NaiveDate>,
    #[serde(with = "opt_date", skip_serializing_if = "Option::is_none", default)]
    pub date_depot: Option<NaiveDate>,
    #[serde(with = "opt_date", default)]
    pub date_arrivee_immat: Option<NaiveDate>,
    #[serde(rename = "dateLivraisonSG", with = "opt_date", default)]
    pub date_livraison_sg: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub observation: Option<String>,
    pub nombre_jours_traitement: u32,
}
