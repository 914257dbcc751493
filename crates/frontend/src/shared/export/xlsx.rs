//! Минимальный SpreadsheetML-пакет: один лист, строки inline-строками.
//!
//! Пять частей архива достаточно и Excel, и LibreOffice, и calamine;
//! styles.xml и sharedStrings.xml не нужны.

use super::{ExportError, ExportTable};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const SHEET_NAME: &str = "Contribuables";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

pub fn encode_xlsx(table: &ExportTable) -> Result<Vec<u8>, ExportError> {
    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES.to_string()),
        ("_rels/.rels", ROOT_RELS.to_string()),
        ("xl/workbook.xml", workbook_xml()),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.to_string()),
        ("xl/worksheets/sheet1.xml", sheet_xml(table)),
    ];

    // Фиксированная дата в архиве: на wasm нет системных часов
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        zip.start_file(name, options)
            .map_err(|e| ExportError::Encode(e.to_string()))?;
        zip.write_all(content.as_bytes())
            .map_err(|e| ExportError::Encode(e.to_string()))?;
    }
    let cursor = zip
        .finish()
        .map_err(|e| ExportError::Encode(e.to_string()))?;

    Ok(cursor.into_inner())
}

fn workbook_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets></workbook>"#,
        escape_xml(SHEET_NAME)
    )
}

fn sheet_xml(table: &ExportTable) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    );

    xml.push_str("<cols>");
    for (i, width) in column_widths(table).into_iter().enumerate() {
        xml.push_str(&format!(
            r#"<col min="{n}" max="{n}" width="{w}" customWidth="1"/>"#,
            n = i + 1,
            w = width
        ));
    }
    xml.push_str("</cols><sheetData>");

    push_row(&mut xml, 1, &table.headers);
    for (i, row) in table.rows.iter().enumerate() {
        push_row(&mut xml, i + 2, row);
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

fn push_row(xml: &mut String, row_number: usize, cells: &[String]) {
    xml.push_str(&format!(r#"<row r="{}">"#, row_number));
    for (col, value) in cells.iter().enumerate() {
        xml.push_str(&format!(
            r#"<c r="{}{}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
            column_letter(col),
            row_number,
            escape_xml(value)
        ));
    }
    xml.push_str("</row>");
}

/// Ширина колонки по самому длинному значению, в символах
fn column_widths(table: &ExportTable) -> Vec<usize> {
    (0..table.column_count())
        .map(|col| {
            let longest = std::iter::once(&table.headers[col])
                .chain(table.rows.iter().filter_map(|r| r.get(col)))
                .map(|v| v.chars().count())
                .max()
                .unwrap_or(0);
            (longest + 2).clamp(8, 50)
        })
        .collect()
}

/// 0 -> A, 25 -> Z, 26 -> AA
pub fn column_letter(index: usize) -> String {
    let mut result = String::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        result.insert(0, (b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    result
}

fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            // Управляющие символы в XML 1.0 недопустимы
            c if (c as u32) < 0x20 && !matches!(c, '\t' | '\n' | '\r') => {}
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Data, Reader, Xlsx};
    use pretty_assertions::assert_eq;

    fn table() -> ExportTable {
        ExportTable {
            title: "Contribuables".into(),
            headers: vec!["NIF".into(), "Raison sociale".into()],
            rows: vec![
                vec!["123".into(), "SARL <A & B>".into()],
                vec!["456".into(), "ETS Ndiaye d'Abidjan".into()],
            ],
        }
    }

    fn read_back(bytes: Vec<u8>) -> Vec<Vec<String>> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range_at(0).unwrap().unwrap();
        range
            .rows()
            .map(|r| {
                r.iter()
                    .map(|c| match c {
                        Data::String(s) => s.clone(),
                        Data::Empty => String::new(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(11), "L");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
        assert_eq!(escape_xml("x\u{1}y"), "xy");
    }

    #[test]
    fn test_xlsx_reads_back_with_calamine() {
        let bytes = encode_xlsx(&table()).unwrap();
        let grid = read_back(bytes);
        assert_eq!(
            grid,
            vec![
                vec!["NIF".to_string(), "Raison sociale".to_string()],
                vec!["123".to_string(), "SARL <A & B>".to_string()],
                vec!["456".to_string(), "ETS Ndiaye d'Abidjan".to_string()],
            ]
        );
    }

    #[test]
    fn test_sheet_name() {
        let bytes = encode_xlsx(&table()).unwrap();
        let workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        assert_eq!(workbook.sheet_names(), vec![SHEET_NAME.to_string()]);
    }
}
