//! Журнал изменений: `GET /api/historique`

use crate::shared::api_utils::{get_json, url_with_query, ApiError};
use contracts::domain::a002_historique::HistoriqueEntree;
use contracts::shared::{ListResponse, QueryParams};

const BASE_PATH: &str = "/api/historique";

pub async fn fetch_page(
    api_base: &str,
    params: QueryParams,
) -> Result<ListResponse<HistoriqueEntree>, ApiError> {
    let url = url_with_query(api_base, BASE_PATH, &params);
    let response: ListResponse<HistoriqueEntree> = get_json(&url).await?;
    if !response.success {
        return Err(ApiError::rejected(response.message));
    }
    Ok(response)
}
