//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use contracts::shared::QueryParams;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Ошибка обращения к REST API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Erreur réseau : {0}")]
    Network(String),
    #[error("Erreur serveur (HTTP {status})")]
    Http { status: u16 },
    #[error("Réponse illisible : {0}")]
    Decode(String),
    /// Сервер ответил `success: false`
    #[error("{message}")]
    Rejected { message: String },
}

impl ApiError {
    pub fn rejected(message: Option<String>) -> Self {
        ApiError::Rejected {
            message: message.unwrap_or_else(|| "Une erreur est survenue".to_string()),
        }
    }
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// `base + path + ?query`; пустой набор параметров не добавляет `?`
pub fn url_with_query(base: &str, path: &str, params: &QueryParams) -> String {
    let query = encode_query(params);
    if query.is_empty() {
        format!("{}{}", base, path)
    } else {
        format!("{}{}?{}", base, path, query)
    }
}

pub fn encode_query(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    log::debug!("POST {}", url);
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    log::debug!("PUT {}", url);
    let response = Request::put(url)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// multipart/form-data; заголовок с boundary браузер проставит сам
pub async fn post_form<T: DeserializeOwned>(url: &str, form: web_sys::FormData) -> Result<T, ApiError> {
    log::debug!("POST (multipart) {}", url);
    let response = Request::post(url)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        log::error!("{} -> HTTP {}", response.url(), status);
        return Err(ApiError::Http { status });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_with_query() {
        let params: QueryParams = [
            ("nif".to_string(), "123".to_string()),
            ("page".to_string(), "1".to_string()),
            ("raisonSociale".to_string(), "SARL B&C".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            url_with_query("http://h:3000", "/api/contribuables", &params),
            "http://h:3000/api/contribuables?nif=123&page=1&raisonSociale=SARL%20B%26C"
        );
        assert_eq!(
            url_with_query("", "/api/statistiques", &QueryParams::new()),
            "/api/statistiques"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ApiError::Http { status: 500 }.to_string(),
            "Erreur serveur (HTTP 500)"
        );
        assert_eq!(
            ApiError::rejected(Some("NIF déjà existant".into())).to_string(),
            "NIF déjà existant"
        );
        assert_eq!(
            ApiError::rejected(None).to_string(),
            "Une erreur est survenue"
        );
    }
}
