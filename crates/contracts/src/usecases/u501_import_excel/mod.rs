use serde::{Deserialize, Serialize};

/// Ответ `POST /api/import` (multipart, поле `file`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub success: bool,
    #[serde(default)]
    pub imported_count: u64,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub message: String,
}

impl ImportResponse {
    /// Строки, которые бэкенд не принял
    pub fn skipped_count(&self) -> u64 {
        self.total_count.saturating_sub(self.imported_count)
    }
}

/// Колонки, которые бэкенд ожидает в файле, в этом порядке
pub const EXPECTED_COLUMNS: [(&str, bool); 6] = [
    ("NIF (Numéro d'Identification Fiscale)", true),
    ("Nom du contribuable", true),
    ("Centre gestionnaire", true),
    ("Date d'arrivée (format JJ/MM/AAAA)", true),
    ("Date de livraison (format JJ/MM/AAAA)", false),
    ("Observation", false),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_import_response() {
        let json = r#"{"success":true,"importedCount":48,"totalCount":50,"message":"Import terminé"}"#;
        let resp: ImportResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.imported_count, 48);
        assert_eq!(resp.skipped_count(), 2);
    }
}
