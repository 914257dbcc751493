use crate::shared::wire::date_time;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Запись журнала изменений досье
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoriqueEntree {
    pub id: String,
    pub nif: String,
    #[serde(default)]
    pub nom_contribuable: String,
    #[serde(with = "date_time")]
    pub date_modification: NaiveDateTime,
    #[serde(default)]
    pub utilisateur: String,
    #[serde(default)]
    pub champ_modifie: String,
    #[serde(default)]
    pub ancienne_valeur: Option<String>,
    #[serde(default)]
    pub nouvelle_valeur: Option<String>,
}
