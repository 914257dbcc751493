//! Состояние страницы в адресной строке (`?active=...&nif=...&page=2`).
//!
//! Запись идёт через `history.replace_state`, без перезагрузки и без
//! новой записи в истории браузера.

use contracts::shared::QueryParams;
use web_sys::window;

/// Ключ активной страницы, его пишет глобальный контекст
pub const ACTIVE_KEY: &str = "active";

pub fn parse_search(search: &str) -> QueryParams {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// `?a=1&b=2`, или пустая строка для пустого набора
pub fn render_search(params: &QueryParams) -> String {
    if params.is_empty() {
        return String::new();
    }
    match serde_qs::to_string(params) {
        Ok(query) => format!("?{}", query),
        Err(e) => {
            log::error!("serde_qs: {}", e);
            String::new()
        }
    }
}

/// Параметры страницы `active` вместе с её собственными параметрами
pub fn with_active(active: &str, params: &QueryParams) -> QueryParams {
    let mut merged = params.clone();
    merged.insert(ACTIVE_KEY.to_string(), active.to_string());
    merged
}

pub fn read_query() -> QueryParams {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_search(&search)
}

pub fn write_query(params: &QueryParams) {
    let search = render_search(params);
    let Some(w) = window() else {
        return;
    };

    // Only update URL if it actually changed
    let current = w.location().search().unwrap_or_default();
    if current == search {
        return;
    }

    let pathname = w.location().pathname().unwrap_or_default();
    let url = if search.is_empty() {
        pathname
    } else {
        search
    };
    if let Ok(history) = w.history() {
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url)) {
            log::warn!("replace_state failed: {:?}", e);
        }
    }
}
