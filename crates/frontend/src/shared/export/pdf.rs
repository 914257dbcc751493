//! Таблица в PDF: A4 альбомная, Helvetica (WinAnsi), шапка таблицы на каждой
//! странице, внизу "Page n / N".

use super::{ExportError, ExportTable};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, StringFormat};

const PAGE_WIDTH: i64 = 842;
const PAGE_HEIGHT: i64 = 595;
const MARGIN: i64 = 30;

const TITLE_Y: i64 = 562;
const HEADER_Y: i64 = 538;
const FOOTER_Y: i64 = 18;
/// Ниже этой линии строки таблицы не опускаются
const BOTTOM_Y: i64 = 32;

const TITLE_SIZE: i64 = 12;
const HEADER_SIZE: i64 = 8;
const BODY_SIZE: i64 = 7;

const HEADER_LEADING: i64 = 10;
const BODY_LEADING: i64 = 9;
const ROW_GAP: i64 = 3;
const CELL_PADDING: i64 = 4;
/// Длиннее этого значения переносятся, колонка шире не становится
const MAX_CELL_CHARS: usize = 40;

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";

/// Верхняя граница строк на странице; высокие строки переносятся раньше
pub const DEFAULT_ROWS_PER_PAGE: usize = 38;

pub fn encode_pdf(table: &ExportTable) -> Result<Vec<u8>, ExportError> {
    encode_pdf_paged(table, DEFAULT_ROWS_PER_PAGE)
}

pub fn encode_pdf_paged(table: &ExportTable, rows_per_page: usize) -> Result<Vec<u8>, ExportError> {
    let encode_err = |e: lopdf::Error| ExportError::Encode(e.to_string());

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_REGULAR => regular_id,
            FONT_BOLD => bold_id,
        },
    });

    let columns = column_layout(table);
    let header = lay_out_row(&columns, &table.headers, HEADER_SIZE);
    let first_row_y = HEADER_Y - (header.line_count - 1) * HEADER_LEADING - 14;
    let rows: Vec<LaidOutRow> = table
        .rows
        .iter()
        .map(|row| lay_out_row(&columns, row, BODY_SIZE))
        .collect();
    let pages = paginate(rows, rows_per_page.max(1), first_row_y - BOTTOM_Y);
    let page_count = pages.len();

    let layout = PageLayout {
        title: &table.title,
        columns: &columns,
        header: &header,
        first_row_y,
    };

    let mut kids: Vec<Object> = Vec::with_capacity(page_count);
    for (i, rows) in pages.iter().enumerate() {
        let content = Content {
            operations: page_operations(&layout, rows, i + 1, page_count),
        };
        let content_id = doc.add_object(lopdf::Stream::new(
            dictionary! {},
            content.encode().map_err(encode_err)?,
        ));
        let media_box: Vec<Object> = vec![int(0), int(0), int(PAGE_WIDTH), int(PAGE_HEIGHT)];
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => media_box,
        });
        kids.push(page_id.into());
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => int(page_count as i64),
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Колонка: левый край и ширина в пунктах
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Column {
    x: i64,
    width: i64,
}

/// Ширина текста в пунктах. Средняя ширина глифа Helvetica с запасом
/// принимается за 3/5 кегля, округление вверх.
fn text_width(chars: usize, font_size: i64) -> i64 {
    (chars as i64 * font_size * 3 + 4) / 5
}

/// Сколько символов помещается в строку ячейки
fn max_chars(width: i64, font_size: i64) -> usize {
    ((width - CELL_PADDING).max(0) * 5 / (font_size * 3)).max(1) as usize
}

/// Минимум колонки: самое длинное слово заголовка целиком. Сверх минимума
/// место делится по длине заголовка и самого длинного значения.
fn column_layout(table: &ExportTable) -> Vec<Column> {
    let (minimums, wanted): (Vec<i64>, Vec<i64>) = (0..table.column_count())
        .map(|col| {
            let header = &table.headers[col];
            let longest_word = header
                .split_whitespace()
                .map(|w| w.chars().count())
                .max()
                .unwrap_or(0);
            let minimum = text_width(longest_word, HEADER_SIZE) + CELL_PADDING;
            let longest_cell = table
                .rows
                .iter()
                .filter_map(|r| r.get(col))
                .map(|v| v.chars().count())
                .max()
                .unwrap_or(0)
                .min(MAX_CELL_CHARS);
            let wanted = (text_width(header.chars().count(), HEADER_SIZE) + CELL_PADDING)
                .max(text_width(longest_cell, BODY_SIZE) + CELL_PADDING)
                .max(minimum);
            (minimum, wanted)
        })
        .unzip();

    let mut x = MARGIN;
    distribute(&minimums, &wanted, PAGE_WIDTH - 2 * MARGIN)
        .into_iter()
        .map(|width| {
            let column = Column { x, width };
            x += width;
            column
        })
        .collect()
}

fn distribute(minimums: &[i64], wanted: &[i64], available: i64) -> Vec<i64> {
    let wanted_total: i64 = wanted.iter().sum();
    let minimum_total: i64 = minimums.iter().sum();

    if wanted_total <= available {
        let spare = available - wanted_total;
        wanted
            .iter()
            .map(|w| w + spare * w / wanted_total.max(1))
            .collect()
    } else if minimum_total <= available {
        let spare = available - minimum_total;
        let demand = wanted_total - minimum_total;
        minimums
            .iter()
            .zip(wanted)
            .map(|(m, w)| m + spare * (w - m) / demand)
            .collect()
    } else {
        // Слишком много колонок: заголовки тоже переносятся посреди слова
        minimums
            .iter()
            .map(|m| available * m / minimum_total)
            .collect()
    }
}

/// Разбивает значение на строки не длиннее `max_chars`, по пробелам.
/// Слово длиннее строки режется на куски. Текст не теряется.
fn wrap(value: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in value.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for piece in chars.chunks(max_chars) {
            if current_len > 0 && current_len + 1 + piece.len() > max_chars {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(piece);
            current_len += piece.len();
        }
    }
    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Строка таблицы, ячейки уже разбиты на строки текста
#[derive(Debug, Clone, PartialEq)]
struct LaidOutRow {
    cells: Vec<Vec<String>>,
    line_count: i64,
}

impl LaidOutRow {
    /// Расстояние от первой базовой линии строки до первой линии следующей
    fn height(&self) -> i64 {
        self.line_count * BODY_LEADING + ROW_GAP
    }
}

fn lay_out_row(columns: &[Column], values: &[String], font_size: i64) -> LaidOutRow {
    let cells: Vec<Vec<String>> = columns
        .iter()
        .zip(values)
        .map(|(column, value)| wrap(value, max_chars(column.width, font_size)))
        .collect();
    let line_count = cells.iter().map(Vec::len).max().unwrap_or(1).max(1) as i64;
    LaidOutRow { cells, line_count }
}

/// Режет строки на страницы: не больше `rows_per_page` и не ниже `room`
/// пунктов от первой базовой линии. Пустая таблица даёт одну страницу.
fn paginate(rows: Vec<LaidOutRow>, rows_per_page: usize, room: i64) -> Vec<Vec<LaidOutRow>> {
    let mut pages = Vec::new();
    let mut current: Vec<LaidOutRow> = Vec::new();
    let mut used = 0;

    for row in rows {
        let depth = (row.line_count - 1) * BODY_LEADING;
        if !current.is_empty() && (current.len() >= rows_per_page || used + depth > room) {
            pages.push(std::mem::take(&mut current));
            used = 0;
        }
        used += row.height();
        current.push(row);
    }
    if !current.is_empty() || pages.is_empty() {
        pages.push(current);
    }
    pages
}

/// Общее для всех страниц документа
struct PageLayout<'a> {
    title: &'a str,
    columns: &'a [Column],
    header: &'a LaidOutRow,
    first_row_y: i64,
}

fn page_operations(
    layout: &PageLayout<'_>,
    rows: &[LaidOutRow],
    page_number: usize,
    page_count: usize,
) -> Vec<Operation> {
    let mut ops = Vec::new();

    ops.extend(text(FONT_BOLD, TITLE_SIZE, MARGIN, TITLE_Y, layout.title));

    for (column, lines) in layout.columns.iter().zip(&layout.header.cells) {
        ops.extend(text_block(
            FONT_BOLD,
            HEADER_SIZE,
            HEADER_LEADING,
            column.x + CELL_PADDING / 2,
            HEADER_Y,
            lines,
        ));
    }
    let rule_y = layout.first_row_y + 10;
    ops.extend(line(MARGIN, rule_y, PAGE_WIDTH - MARGIN, rule_y));

    let mut y = layout.first_row_y;
    for row in rows {
        for (column, lines) in layout.columns.iter().zip(&row.cells) {
            ops.extend(text_block(
                FONT_REGULAR,
                BODY_SIZE,
                BODY_LEADING,
                column.x + CELL_PADDING / 2,
                y,
                lines,
            ));
        }
        y -= row.height();
    }

    let footer = format!("Page {} / {}", page_number, page_count);
    ops.extend(text(FONT_REGULAR, BODY_SIZE, PAGE_WIDTH - MARGIN - 50, FOOTER_Y, &footer));
    ops
}

fn int(value: i64) -> Object {
    Object::Integer(value)
}

fn text(font: &str, size: i64, x: i64, y: i64, value: &str) -> Vec<Operation> {
    text_block(font, size, size, x, y, &[value.to_string()])
}

/// Один текстовый объект на ячейку, строки через `T*`
fn text_block(
    font: &str,
    size: i64,
    leading: i64,
    x: i64,
    y: i64,
    lines: &[String],
) -> Vec<Operation> {
    let mut ops = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![Object::Name(font.as_bytes().to_vec()), int(size)]),
        Operation::new("TL", vec![int(leading)]),
        Operation::new("Td", vec![int(x), int(y)]),
    ];
    for (i, value) in lines.iter().enumerate() {
        if i > 0 {
            ops.push(Operation::new("T*", vec![]));
        }
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(value), StringFormat::Literal)],
        ));
    }
    ops.push(Operation::new("ET", vec![]));
    ops
}

fn line(x1: i64, y1: i64, x2: i64, y2: i64) -> Vec<Operation> {
    vec![
        Operation::new("w", vec![int(1)]),
        Operation::new("m", vec![int(x1), int(y1)]),
        Operation::new("l", vec![int(x2), int(y2)]),
        Operation::new("S", vec![]),
    ]
}

/// Строка в WinAnsiEncoding; символы вне кодировки заменяются на '?'
pub(crate) fn encode_win_ansi(value: &str) -> Vec<u8> {
    value
        .chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            'Œ' => 0x8c,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '–' => 0x96,
            '—' => 0x97,
            'œ' => 0x9c,
            'Ÿ' => 0x9f,
            _ => b'?',
        })
        .collect()
}

/// Текст страниц документа: по странице список текстовых объектов,
/// строки объекта склеены через пробел
#[cfg(test)]
pub(crate) fn page_text_blocks(bytes: &[u8]) -> Vec<Vec<Vec<u8>>> {
    let doc = Document::load_mem(bytes).unwrap();
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let raw = doc.get_page_content(page_id).unwrap();
            let content = Content::decode(&raw).unwrap();
            let mut blocks = Vec::new();
            let mut current: Option<Vec<u8>> = None;
            for op in &content.operations {
                match op.operator.as_str() {
                    "BT" => current = Some(Vec::new()),
                    "Tj" => {
                        if let Some(block) = current.as_mut() {
                            if !block.is_empty() {
                                block.push(b' ');
                            }
                            block.extend_from_slice(op.operands[0].as_str().unwrap());
                        }
                    }
                    "ET" => blocks.extend(current.take()),
                    _ => {}
                }
            }
            blocks
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(rows: usize) -> ExportTable {
        ExportTable {
            title: "Contribuables".into(),
            headers: vec!["NIF".into(), "Date de dépôt".into()],
            rows: (0..rows)
                .map(|i| vec![format!("{:09}", i), "10/05/2023".to_string()])
                .collect(),
        }
    }

    #[test]
    fn test_win_ansi() {
        assert_eq!(encode_win_ansi("Dépôt"), vec![0x44, 0xe9, 0x70, 0xf4, 0x74]);
        assert_eq!(encode_win_ansi("Œuvre"), vec![0x8c, b'u', b'v', b'r', b'e']);
        assert_eq!(encode_win_ansi("日"), vec![b'?']);
    }

    #[test]
    fn test_wrap_breaks_on_spaces() {
        let value = "COMPAGNIE GENERALE DES EAUX DE COTE D'IVOIRE";
        let lines = wrap(value, 12);
        assert_eq!(
            lines,
            vec!["COMPAGNIE", "GENERALE DES", "EAUX DE COTE", "D'IVOIRE"]
        );
        assert_eq!(lines.join(" "), value);
        assert_eq!(wrap("court", 12), vec!["court"]);
    }

    #[test]
    fn test_wrap_splits_overlong_word() {
        assert_eq!(wrap("ABCDEFGHIJ", 4), vec!["ABCD", "EFGH", "IJ"]);
        assert_eq!(wrap("ab ABCDEFGHIJ", 4), vec!["ab", "ABCD", "EFGH", "IJ"]);
        assert_eq!(wrap("", 5), vec![""]);
    }

    #[test]
    fn test_header_words_fit_their_column() {
        let headers = [
            "NIF",
            "Raison sociale",
            "Centre gestionnaire",
            "Documents",
            "Quantité",
            "À jour",
            "Rejet",
            "Date de dépôt",
            "Date d'arrivée Immat",
            "Date de livraison SG",
            "Jours de traitement",
        ];
        let long = "COMPAGNIE GENERALE DES EAUX DE COTE D'IVOIRE ".repeat(3);
        let table = ExportTable {
            title: "Contribuables".into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: vec![headers.iter().map(|_| long.clone()).collect()],
        };
        let columns = column_layout(&table);
        for (column, header) in columns.iter().zip(headers) {
            let limit = max_chars(column.width, HEADER_SIZE);
            for word in header.split_whitespace() {
                assert!(word.chars().count() <= limit, "{} in {:?}", word, column);
            }
            assert_eq!(wrap(header, limit).join(" "), header);
        }
    }

    #[test]
    fn test_columns_fill_available_width() {
        let columns = column_layout(&table(3));
        assert_eq!(columns[0].x, MARGIN);
        let right = columns.last().map(|c| c.x + c.width).unwrap();
        assert!(right <= PAGE_WIDTH - MARGIN);
        assert!(right > PAGE_WIDTH - MARGIN - 5);
    }

    #[test]
    fn test_header_repeated_on_every_page() {
        let bytes = encode_pdf_paged(&table(5), 2).unwrap();
        let pages = page_text_blocks(&bytes);
        assert_eq!(pages.len(), 3);

        for (i, texts) in pages.iter().enumerate() {
            assert_eq!(texts[0], b"Contribuables".to_vec());
            assert_eq!(texts[1], b"NIF".to_vec());
            assert_eq!(texts[2], encode_win_ansi("Date de dépôt"));
            let footer = format!("Page {} / 3", i + 1).into_bytes();
            assert_eq!(texts.last(), Some(&footer));
        }

        // 2 + 2 + 1 строк по 2 ячейки, плюс заголовок, 2 колонки и подвал
        let counts: Vec<usize> = pages.iter().map(Vec::len).collect();
        assert_eq!(counts, vec![8, 8, 6]);
    }

    #[test]
    fn test_rows_in_order() {
        let bytes = encode_pdf(&table(3)).unwrap();
        let pages = page_text_blocks(&bytes);
        assert_eq!(pages.len(), 1);
        let body: Vec<Vec<u8>> = pages[0][3..pages[0].len() - 1].to_vec();
        assert_eq!(
            body,
            vec![
                b"000000000".to_vec(),
                b"10/05/2023".to_vec(),
                b"000000001".to_vec(),
                b"10/05/2023".to_vec(),
                b"000000002".to_vec(),
                b"10/05/2023".to_vec(),
            ]
        );
    }

    #[test]
    fn test_tall_rows_break_page_early() {
        let text = "mot ".repeat(150).trim_end().to_string();
        let table = ExportTable {
            title: "Observations".into(),
            headers: vec!["NIF".into(), "Observation".into()],
            rows: (0..25).map(|i| vec![format!("{:09}", i), text.clone()]).collect(),
        };
        let bytes = encode_pdf(&table).unwrap();
        let pages = page_text_blocks(&bytes);
        assert!(pages.len() > 1);

        // Все строки на месте и целиком, в исходном порядке
        let body: Vec<Vec<u8>> = pages
            .iter()
            .flat_map(|texts| texts[3..texts.len() - 1].to_vec())
            .collect();
        let expected: Vec<Vec<u8>> = table
            .rows
            .iter()
            .flatten()
            .map(|v| encode_win_ansi(v))
            .collect();
        assert_eq!(body, expected);
    }

    #[test]
    fn test_paginate_respects_room() {
        let row = |lines: i64| LaidOutRow {
            cells: vec![vec![String::new(); lines as usize]],
            line_count: lines,
        };
        // Высота строки в 5 линий: 48, в одну: 12
        let pages = paginate(vec![row(5), row(5), row(1), row(1)], 10, 60);
        let sizes: Vec<usize> = pages.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![1, 3]);

        assert_eq!(paginate(Vec::new(), 10, 60).len(), 1);
    }
}
