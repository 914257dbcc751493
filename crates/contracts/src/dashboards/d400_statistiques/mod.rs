use serde::{Deserialize, Serialize};

/// Показатели за месяц для графика на главной
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMensuelle {
    pub mois: String,
    pub traites: u32,
    pub rejetes: u32,
}

/// Ответ `GET /api/statistiques`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistiques {
    pub total_dossiers: u64,
    pub dossiers_en_cours: u64,
    pub dossiers_livres: u64,
    pub dossiers_rejetes: u64,
    /// Средний срок обработки, дни
    pub delai_moyen_traitement: f64,
    #[serde(default)]
    pub performance_mensuelle: Vec<PerformanceMensuelle>,
}

impl Statistiques {
    /// Доля отклонённых досье, %
    pub fn taux_rejet(&self) -> f64 {
        if self.total_dossiers == 0 {
            return 0.0;
        }
        self.dossiers_rejetes as f64 * 100.0 / self.total_dossiers as f64
    }

    /// Максимум по месяцам, для масштаба столбцов
    pub fn max_mensuel(&self) -> u32 {
        self.performance_mensuelle
            .iter()
            .map(|p| p.traites.max(p.rejetes))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_and_scale() {
        let json = r#"{
            "totalDossiers": 1258,
            "dossiersEnCours": 47,
            "dossiersLivres": 1156,
            "dossiersRejetes": 55,
            "delaiMoyenTraitement": 3.2,
            "performanceMensuelle": [
                { "mois": "Jan", "traites": 125, "rejetes": 8 },
                { "mois": "Mai", "traites": 168, "rejetes": 12 }
            ]
        }"#;
        let stats: Statistiques = serde_json::from_str(json).unwrap();
        assert_eq!(stats.max_mensuel(), 168);
        assert!((stats.taux_rejet() - 4.372).abs() < 0.01);
    }

    #[test]
    fn test_empty_totals() {
        let stats = Statistiques {
            total_dossiers: 0,
            dossiers_en_cours: 0,
            dossiers_livres: 0,
            dossiers_rejetes: 0,
            delai_moyen_traitement: 0.0,
            performance_mensuelle: vec![],
        };
        assert_eq!(stats.taux_rejet(), 0.0);
        assert_eq!(stats.max_mensuel(), 0);
    }
}
