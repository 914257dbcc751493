use crate::shared::api_utils::{get_json, ApiError};
use contracts::dashboards::d400_statistiques::Statistiques;

const API_PATH: &str = "/api/statistiques";

/// Сводные показатели для главной страницы
pub async fn get_statistiques(api_base: &str) -> Result<Statistiques, ApiError> {
    get_json(&format!("{}{}", api_base, API_PATH)).await
}
