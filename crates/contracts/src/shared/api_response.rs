use super::paging::{total_pages, Page};
use serde::{Deserialize, Serialize};

/// Блок пагинации в ответе списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    #[serde(default)]
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn page(&self) -> Page {
        Page::new(self.page, self.page_size)
    }

    /// Число страниц считается из total и размера страницы,
    /// значение `totalPages` бэкенда используется только для логов.
    pub fn computed_total_pages(&self) -> u32 {
        total_pages(self.total, self.page().size())
    }
}

/// Ответ эндпоинта списка: `{ success, data, pagination }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Ответ эндпоинта одной записи: `{ success, data }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ItemResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
