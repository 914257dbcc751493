//! Экспорт текущей страницы таблицы в .xlsx и .pdf
//!
//! Строки превращаются в `ExportTable` один раз, оба кодировщика получают
//! одинаковые заголовки и одинаковые уже отформатированные значения.

pub mod download;
pub mod pdf;
pub mod xlsx;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Aucune donnée à exporter")]
    NoRows,
    #[error("Erreur lors de la génération du fichier : {0}")]
    Encode(String),
    #[error("Erreur lors du téléchargement : {0}")]
    Download(String),
}

/// Trait для типов, которые можно выгрузить в таблицу
pub trait TableExportable {
    /// Заголовки колонок, в порядке колонок
    fn headers() -> Vec<&'static str>;

    /// Значения строки в том виде, в каком они показаны на экране
    fn to_row(&self) -> Vec<String>;
}

/// Таблица, готовая к кодированию
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn from_rows<T: TableExportable>(title: &str, rows: &[T]) -> Result<Self, ExportError> {
        if rows.is_empty() {
            return Err(ExportError::NoRows);
        }
        Ok(Self {
            title: title.to_string(),
            headers: T::headers().into_iter().map(str::to_string).collect(),
            rows: rows.iter().map(TableExportable::to_row).collect(),
        })
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// `rows_per_page` учитывается только для PDF
    pub fn encode(&self, table: &ExportTable, rows_per_page: usize) -> Result<Vec<u8>, ExportError> {
        match self {
            ExportFormat::Xlsx => xlsx::encode_xlsx(table),
            ExportFormat::Pdf => pdf::encode_pdf_paged(table, rows_per_page),
        }
    }
}

/// `contribuables_2023-05-10.xlsx`
pub fn export_filename(prefix: &str, format: ExportFormat, today: NaiveDate) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        today.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Кодирует строки и инициирует скачивание. Сети не касается.
pub fn export_rows<T: TableExportable>(
    rows: &[T],
    title: &str,
    prefix: &str,
    format: ExportFormat,
    rows_per_page: usize,
) -> Result<String, ExportError> {
    let table = ExportTable::from_rows(title, rows)?;
    let bytes = format.encode(&table, rows_per_page)?;
    let filename = export_filename(prefix, format, chrono::Local::now().date_naive());
    download::download_bytes(&bytes, format.mime_type(), &filename)?;
    log::info!(
        "export {}: {} rows -> {}",
        format.extension(),
        table.rows.len(),
        filename
    );
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str);

    impl TableExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Nom"]
        }

        fn to_row(&self) -> Vec<String> {
            vec![self.0.to_string()]
        }
    }

    #[test]
    fn test_filename_has_iso_date() {
        let today = NaiveDate::from_ymd_opt(2023, 5, 10).unwrap();
        assert_eq!(
            export_filename("contribuables", ExportFormat::Xlsx, today),
            "contribuables_2023-05-10.xlsx"
        );
        assert_eq!(
            export_filename("contribuables", ExportFormat::Pdf, today),
            "contribuables_2023-05-10.pdf"
        );
    }

    #[test]
    fn test_empty_rows_rejected() {
        let rows: Vec<Row> = vec![];
        assert_eq!(
            ExportTable::from_rows("Contribuables", &rows),
            Err(ExportError::NoRows)
        );
    }

    #[test]
    fn test_table_from_rows() {
        let table = ExportTable::from_rows("T", &[Row("a"), Row("b")]).unwrap();
        assert_eq!(table.headers, vec!["Nom".to_string()]);
        assert_eq!(table.rows, vec![vec!["a".to_string()], vec!["b".to_string()]]);
        assert_eq!(table.column_count(), 1);
    }
}
