//! REST-клиент досье: `/api/contribuables`

use crate::shared::api_utils::{get_json, post_json, put_json, url_with_query, ApiError};
use contracts::domain::a001_contribuable::{Contribuable, DossierPayload};
use contracts::shared::{ItemResponse, ListResponse, QueryParams};

const BASE_PATH: &str = "/api/contribuables";

fn item_url(api_base: &str, id: &str) -> String {
    format!("{}{}/{}", api_base, BASE_PATH, urlencoding::encode(id))
}

/// Страница досье по критериям поиска
pub async fn fetch_page(
    api_base: &str,
    params: QueryParams,
) -> Result<ListResponse<Contribuable>, ApiError> {
    let url = url_with_query(api_base, BASE_PATH, &params);
    let response: ListResponse<Contribuable> = get_json(&url).await?;
    if !response.success {
        return Err(ApiError::rejected(response.message));
    }
    Ok(response)
}

pub async fn fetch_by_id(api_base: &str, id: &str) -> Result<Contribuable, ApiError> {
    let response: ItemResponse<Contribuable> = get_json(&item_url(api_base, id)).await?;
    match response {
        ItemResponse {
            success: true,
            data: Some(dossier),
            ..
        } => Ok(dossier),
        ItemResponse { message, .. } => Err(ApiError::rejected(message)),
    }
}

/// Сохраняет досье: PUT для существующего, POST для нового
pub async fn save(api_base: &str, id: Option<&str>, payload: &DossierPayload) -> Result<(), ApiError> {
    // Тело ответа разное у POST и PUT, проверяем только флаг
    let response: ItemResponse<serde_json::Value> = match id {
        Some(id) => put_json(&item_url(api_base, id), payload).await?,
        None => post_json(&format!("{}{}", api_base, BASE_PATH), payload).await?,
    };
    if !response.success {
        return Err(ApiError::rejected(response.message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_url_escapes_id() {
        assert_eq!(
            item_url("http://h:3000", "64b7"),
            "http://h:3000/api/contribuables/64b7"
        );
        assert_eq!(item_url("", "a/b"), "/api/contribuables/a%2Fb");
    }
}
