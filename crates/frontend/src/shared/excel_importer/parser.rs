//! Чтение загружаемого файла и разбор первого листа через calamine
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use contracts::shared::wire::flag_label;
use std::io::Cursor;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    #[error("Impossible de lire le fichier : {0}")]
    Read(String),
    #[error("Le fichier n'est pas un classeur Excel valide : {0}")]
    Decode(String),
    #[error("Le fichier ne contient aucune donnée")]
    EmptyWorkbook,
}

/// Читает содержимое `File` целиком
pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, PreviewError> {
    use wasm_bindgen_futures::JsFuture;

    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| PreviewError::Read(format!("{:?}", e)))?;

    let uint8_array = js_sys::Uint8Array::new(&array_buffer);
    Ok(uint8_array.to_vec())
}

/// Первый лист книги как сетка строк. Формат (xlsx/xls) определяется по содержимому.
pub fn decode_workbook(bytes: &[u8]) -> Result<Vec<Vec<String>>, PreviewError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| PreviewError::Decode(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(PreviewError::EmptyWorkbook)?
        .map_err(|e| PreviewError::Decode(e.to_string()))?;

    Ok(range
        .rows()
        .map(|r| r.iter().map(cell_to_string).collect())
        .collect())
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => flag_label(*v).to_string(),
        // Даты показываем так же, как в таблицах консоли
        Data::DateTime(v) => v
            .as_datetime()
            .map(|dt| dt.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| v.to_string()),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}
