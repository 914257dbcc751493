//! Настройки консоли. Создаются один раз в `App` и раздаются через контекст.
use super::api_utils::api_base;
use contracts::shared::DEFAULT_PAGE_SIZE;
use leptos::prelude::*;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const XLS_MIME: &str = "application/vnd.ms-excel";

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// База REST API, например "http://localhost:3000"
    pub api_base: String,
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
    /// Сколько номеров показывать по обе стороны от текущей страницы
    pub sibling_count: u32,
    /// Максимальный размер файла импорта, байты
    pub max_import_size: u64,
    pub accepted_mime_types: Vec<&'static str>,
    /// Расширения, которые принимаются, если браузер не сообщил MIME-тип
    pub accepted_extensions: Vec<&'static str>,
    /// Строк в предпросмотре импорта, вместе с заголовком
    pub preview_row_limit: usize,
    pub pdf_rows_per_page: usize,
    pub toast_timeout_ms: u32,
    /// Префикс имён файлов экспорта
    pub export_prefix: &'static str,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 20, 50, 100],
            sibling_count: 1,
            max_import_size: 10 * 1024 * 1024,
            accepted_mime_types: vec![XLSX_MIME, XLS_MIME],
            accepted_extensions: vec!["xlsx", "xls"],
            preview_row_limit: 10,
            pdf_rows_per_page: crate::shared::export::pdf::DEFAULT_ROWS_PER_PAGE,
            toast_timeout_ms: 5_000,
            export_prefix: "contribuables",
        }
    }
}

impl ConsoleConfig {
    /// Конфигурация для текущего окна браузера
    pub fn from_window() -> Self {
        Self {
            api_base: api_base(),
            ..Self::default()
        }
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

pub fn provide_config(config: ConsoleConfig) {
    log::debug!("console config: api_base={}", config.api_base);
    provide_context(config);
}

/// Конфигурация из контекста; вне `App` (в тестах) используются значения по умолчанию
pub fn use_config() -> ConsoleConfig {
    use_context::<ConsoleConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.default_page_size, 10);
        assert!(config.page_size_options.contains(&config.default_page_size));
        assert_eq!(config.max_import_size, 10_485_760);
        assert_eq!(config.preview_row_limit, 10);
    }

    #[test]
    fn test_api_url() {
        let config = ConsoleConfig {
            api_base: "http://localhost:3000".into(),
            ..ConsoleConfig::default()
        };
        assert_eq!(
            config.api_url("/api/contribuables"),
            "http://localhost:3000/api/contribuables"
        );
    }
}
