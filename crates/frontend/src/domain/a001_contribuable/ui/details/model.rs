//! Черновик формы досье и его проверка перед сохранением.

use chrono::NaiveDate;
use contracts::domain::a001_contribuable::{days_in_treatment, Contribuable, DossierPayload};
use contracts::shared::query::normalize_text;
use thiserror::Error;

pub const CENTRES: [&str; 5] = ["DGE", "CIME EST", "CIME OUEST", "CIME SUD", "CIME NORD"];

pub const MOTIFS_REJET: [&str; 4] = [
    "Documents incomplets",
    "Informations incorrectes",
    "Doublons",
    "Autre",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Le NIF est requis")]
    NifRequired,
    #[error("Le nom est requis")]
    RaisonSocialeRequired,
    #[error("Le centre gestionnaire est requis")]
    CentreRequired,
    #[error("La date d'arrivée est requise")]
    DateArriveeRequired,
}

impl DraftError {
    /// id поля формы, под которым показывается сообщение
    pub fn field(&self) -> &'static str {
        match self {
            DraftError::NifRequired => "nif",
            DraftError::RaisonSocialeRequired => "raisonSociale",
            DraftError::CentreRequired => "centreGestionnaire",
            DraftError::DateArriveeRequired => "dateArriveeImmat",
        }
    }
}

/// Состояние формы редактирования. Текстовые поля хранятся как введены,
/// обрезка и отбрасывание пустых значений происходят в `validate`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DossierDraft {
    pub nif: String,
    pub raison_sociale: String,
    pub centre_gestionnaire: String,
    pub documents: String,
    pub quantite: u32,
    pub a_jour: bool,
    pub rejet: bool,
    pub motif_rejet: String,
    pub date_rejet: Option<NaiveDate>,
    pub date_depot: Option<NaiveDate>,
    pub date_arrivee_immat: Option<NaiveDate>,
    pub date_livraison_sg: Option<NaiveDate>,
    pub observation: String,
}

impl DossierDraft {
    pub fn from_contribuable(c: &Contribuable) -> Self {
        Self {
            nif: c.nif.clone(),
            raison_sociale: c.raison_sociale.clone(),
            centre_gestionnaire: c.centre_gestionnaire.clone(),
            documents: c.documents.clone(),
            quantite: c.quantite,
            a_jour: c.a_jour,
            rejet: c.rejet,
            motif_rejet: c.motif_rejet.clone().unwrap_or_default(),
            date_rejet: c.date_rejet,
            date_depot: c.date_depot,
            date_arrivee_immat: c.date_arrivee_immat,
            date_livraison_sg: c.date_livraison_sg,
            observation: c.observation.clone().unwrap_or_default(),
        }
    }

    /// Пересчитывается при каждом изменении дат
    pub fn days_in_treatment(&self) -> u32 {
        days_in_treatment(self.date_arrivee_immat, self.date_livraison_sg)
    }

    /// Сообщение для поля `field`, если оно не прошло проверку
    pub fn error_for(errors: &[DraftError], field: &str) -> Option<String> {
        errors
            .iter()
            .find(|e| e.field() == field)
            .map(ToString::to_string)
    }

    pub fn validate(&self) -> Result<DossierPayload, Vec<DraftError>> {
        let mut errors = Vec::new();
        if self.nif.trim().is_empty() {
            errors.push(DraftError::NifRequired);
        }
        if self.raison_sociale.trim().is_empty() {
            errors.push(DraftError::RaisonSocialeRequired);
        }
        if self.centre_gestionnaire.trim().is_empty() {
            errors.push(DraftError::CentreRequired);
        }
        if self.date_arrivee_immat.is_none() {
            errors.push(DraftError::DateArriveeRequired);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        // Без отказа мотив и дата отказа не отправляются
        let (motif_rejet, date_rejet) = if self.rejet {
            (normalize_text(self.motif_rejet.trim()), self.date_rejet)
        } else {
            (None, None)
        };

        Ok(DossierPayload {
            nif: self.nif.trim().to_string(),
            raison_sociale: self.raison_sociale.trim().to_string(),
            centre_gestionnaire: self.centre_gestionnaire.trim().to_string(),
            documents: self.documents.trim().to_string(),
            quantite: self.quantite,
            a_jour: self.a_jour,
            rejet: self.rejet,
            motif_rejet,
            date_rejet,
            date_depot: self.date_depot,
            date_arrivee_immat: self.date_arrivee_immat,
            date_livraison_sg: self.date_livraison_sg,
            observation: normalize_text(self.observation.trim()),
            nombre_jours_traitement: self.days_in_treatment(),
        })
    }
}
