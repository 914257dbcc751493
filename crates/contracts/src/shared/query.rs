//! Преобразование "критерии + страница" <-> плоский набор query-параметров.
//!
//! Один и тот же набор параметров уходит на бэкенд и зеркалируется в
//! адресную строку, поэтому преобразование чистое и обратимое:
//! `to_query_params(from_query_params(to_query_params(c, p))) == to_query_params(c, p)`.

use super::paging::{Page, DEFAULT_PAGE_SIZE};
use super::wire;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Плоский набор параметров, упорядоченный по ключу
pub type QueryParams = BTreeMap<String, String>;

pub const PAGE: &str = "page";
pub const PAGE_SIZE: &str = "pageSize";
/// Старое имя параметра размера страницы, принимается только при чтении
pub const LIMIT_ALIAS: &str = "limit";

/// Критерии фильтрации списка, которые умеют писать и читать себя из параметров.
///
/// Отсутствующее поле не пишется вовсе; при чтении нераспознанное значение
/// считается отсутствующим.
pub trait QueryCriteria: Sized {
    fn write_params(&self, params: &mut QueryParams);

    fn read_params(params: &QueryParams) -> Self;
}

pub fn to_query_params<C: QueryCriteria>(criteria: &C, page: Page) -> QueryParams {
    let mut params = QueryParams::new();
    criteria.write_params(&mut params);
    params.insert(PAGE.to_string(), page.index().to_string());
    params.insert(PAGE_SIZE.to_string(), page.size().to_string());
    params
}

pub fn from_query_params<C: QueryCriteria>(params: &QueryParams) -> (C, Page) {
    let index = read_u32(params, PAGE).filter(|v| *v >= 1).unwrap_or(1);
    let size = read_u32(params, PAGE_SIZE)
        .or_else(|| read_u32(params, LIMIT_ALIAS))
        .filter(|v| *v >= 1)
        .unwrap_or(DEFAULT_PAGE_SIZE);

    (C::read_params(params), Page::new(index, size))
}

// ---------------------------------------------------------------------------
// Помощники для реализаций QueryCriteria
// ---------------------------------------------------------------------------

/// Нормализует текст фильтра: пустая строка или одни пробелы означают "нет фильтра"
pub fn normalize_text(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Текст из поля ввода как есть, пробелы сохраняются. Пустое поле означает
/// отсутствие значения.
pub fn raw_text(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Черновик поля к отправке: значение из одних пробелов отбрасывается
pub fn normalize_field(value: &Option<String>) -> Option<String> {
    value.as_deref().and_then(normalize_text)
}

pub fn put_text(params: &mut QueryParams, key: &str, value: &Option<String>) {
    if let Some(v) = normalize_field(value) {
        params.insert(key.to_string(), v);
    }
}

pub fn put_u32(params: &mut QueryParams, key: &str, value: Option<u32>) {
    if let Some(v) = value {
        params.insert(key.to_string(), v.to_string());
    }
}

pub fn put_flag(params: &mut QueryParams, key: &str, value: Option<bool>) {
    if let Some(v) = value {
        params.insert(key.to_string(), wire::flag_label(v).to_string());
    }
}

pub fn put_date(params: &mut QueryParams, key: &str, value: Option<NaiveDate>) {
    if let Some(v) = value {
        params.insert(key.to_string(), wire::format_iso_date(v));
    }
}

pub fn read_text(params: &QueryParams, key: &str) -> Option<String> {
    params.get(key).and_then(|v| normalize_text(v))
}

pub fn read_u32(params: &QueryParams, key: &str) -> Option<u32> {
    params.get(key).and_then(|v| v.trim().parse::<u32>().ok())
}

pub fn read_flag(params: &QueryParams, key: &str) -> Option<bool> {
    params.get(key).and_then(|v| wire::parse_flag(v).ok())
}

pub fn read_date(params: &QueryParams, key: &str) -> Option<NaiveDate> {
    params.get(key).and_then(|v| wire::parse_date(v).ok())
}
