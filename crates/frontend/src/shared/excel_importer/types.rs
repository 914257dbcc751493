use super::parser::PreviewError;

/// Что показывать в пустой ячейке предпросмотра
pub const EMPTY_CELL: &str = "-";

/// Предпросмотр первых строк загружаемого файла.
///
/// Первая строка файла считается заголовком.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPreview {
    pub file_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Число непустых строк данных во всём листе (без заголовка)
    pub total_rows: usize,
}

impl SheetPreview {
    /// Собирает предпросмотр из сетки значений: берёт `limit` строк вместе
    /// с заголовком, полностью пустые строки пропускает.
    pub fn from_grid(
        file_name: &str,
        grid: Vec<Vec<String>>,
        limit: usize,
    ) -> Result<Self, PreviewError> {
        let mut non_empty = grid
            .into_iter()
            .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()));

        let header_row = non_empty.next().ok_or(PreviewError::EmptyWorkbook)?;
        let data: Vec<Vec<String>> = non_empty.collect();
        let total_rows = data.len();

        let width = data
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(header_row.len()))
            .max()
            .unwrap_or(0);

        let headers = (0..width)
            .map(|i| match header_row.get(i).map(|h| h.trim()) {
                Some(h) if !h.is_empty() => h.to_string(),
                _ => format!("Colonne {}", i + 1),
            })
            .collect();

        let rows = data
            .into_iter()
            .take(limit.saturating_sub(1))
            .map(|row| {
                (0..width)
                    .map(|i| match row.get(i).map(|c| c.trim()) {
                        Some(c) if !c.is_empty() => c.to_string(),
                        _ => EMPTY_CELL.to_string(),
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            file_name: file_name.to_string(),
            headers,
            rows,
            total_rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_empty_headers_and_cells() {
        let preview = SheetPreview::from_grid(
            "import.xlsx",
            grid(&[
                &["NIF", "", "Centre"],
                &["123", "SARL", ""],
                &["456"],
            ]),
            10,
        )
        .unwrap();

        assert_eq!(preview.headers, vec!["NIF", "Colonne 2", "Centre"]);
        assert_eq!(
            preview.rows,
            grid(&[&["123", "SARL", "-"], &["456", "-", "-"]])
        );
        assert_eq!(preview.total_rows, 2);
    }

    #[test]
    fn test_limit_counts_header_row() {
        let mut rows = vec![vec!["NIF".to_string()]];
        rows.extend((0..25).map(|i| vec![i.to_string()]));

        let preview = SheetPreview::from_grid("f.xlsx", rows, 10).unwrap();
        assert_eq!(preview.rows.len(), 9);
        assert_eq!(preview.total_rows, 25);
    }

    #[test]
    fn test_blank_rows_skipped() {
        let preview = SheetPreview::from_grid(
            "f.xlsx",
            grid(&[&["", ""], &["NIF", "Nom"], &[" ", ""], &["1", "A"]]),
            10,
        )
        .unwrap();
        assert_eq!(preview.headers, vec!["NIF", "Nom"]);
        assert_eq!(preview.rows, grid(&[&["1", "A"]]));
    }

    #[test]
    fn test_empty_sheet() {
        assert_eq!(
            SheetPreview::from_grid("f.xlsx", grid(&[&["", ""]]), 10),
            Err(PreviewError::EmptyWorkbook)
        );
    }
}
