use crate::shared::date_utils::format_date;
use crate::shared::export::TableExportable;
use crate::shared::icons::icon;
use contracts::domain::a001_contribuable::Contribuable;
use contracts::shared::wire::flag_label;
use leptos::prelude::*;

/// Колонки таблицы досье, они же колонки экспорта
pub const COLUMNS: [&str; 11] = [
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

const COL_A_JOUR: usize = 5;
const COL_REJET: usize = 6;
const SKELETON_ROWS: usize = 5;

impl TableExportable for Contribuable {
    fn headers() -> Vec<&'static str> {
        COLUMNS.to_vec()
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.nif.clone(),
            self.raison_sociale.clone(),
            self.centre_gestionnaire.clone(),
            self.documents.clone(),
            self.quantite.to_string(),
            flag_label(self.a_jour).to_string(),
            flag_label(self.rejet).to_string(),
            format_date(self.date_depot),
            format_date(self.date_arrivee_immat),
            format_date(self.date_livraison_sg),
            self.days_in_treatment().to_string(),
        ]
    }
}

fn badge_class(column: usize, value: bool) -> &'static str {
    match (column, value) {
        (COL_A_JOUR, true) => "badge badge--success",
        (COL_REJET, true) => "badge badge--error",
        _ => "badge badge--neutral",
    }
}

#[component]
pub fn ContribuableTable(
    #[prop(into)]
    rows: Signal<Vec<Contribuable>>,
    #[prop(into)]
    loading: Signal<bool>,
    on_edit: Callback<String>,
) -> impl IntoView {
    let body = move || {
        if loading.get() {
            return (0..SKELETON_ROWS)
                .map(|_| {
                    view! {
                        <tr class="table__row table__row--skeleton">
                            {(0..=COLUMNS.len())
                                .map(|_| view! { <td><div class="skeleton"></div></td> })
                                .collect_view()}
                        </tr>
                    }
                })
                .collect_view()
                .into_any();
        }

        let rows = rows.get();
        if rows.is_empty() {
            return view! {
                <tr>
                    <td class="table__empty" colspan=(COLUMNS.len() + 1).to_string()>
                        "Aucun résultat trouvé"
                    </td>
                </tr>
            }
            .into_any();
        }

        rows.into_iter()
            .map(|c| {
                let id = c.id.clone();
                let flags = [(COL_A_JOUR, c.a_jour), (COL_REJET, c.rejet)];
                let cells = c.to_row();
                view! {
                    <tr class="table__row">
                        {cells
                            .into_iter()
                            .enumerate()
                            .map(|(i, value)| {
                                match flags.iter().find(|(col, _)| *col == i) {
                                    Some((col, flag)) => view! {
                                        <td><span class=badge_class(*col, *flag)>{value}</span></td>
                                    }
                                    .into_any(),
                                    None => view! { <td>{value}</td> }.into_any(),
                                }
                            })
                            .collect_view()}
                        <td class="table__actions">
                            <button
                                class="table__action-btn"
                                title="Modifier"
                                on:click=move |_| on_edit.run(id.clone())
                            >
                                {icon("edit")}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="table-container">
            <table class="table">
                <thead>
                    <tr>
                        {COLUMNS.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::pdf::{encode_pdf, encode_win_ansi, page_text_blocks};
    use crate::shared::export::xlsx::encode_xlsx;
    use crate::shared::export::ExportTable;
    use calamine::{Data, Reader, Xlsx};
    use chrono::NaiveDate;
    use lopdf::content::Content;
    use lopdf::Document;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn dossier(id: &str, arrival: Option<NaiveDate>, delivery: Option<NaiveDate>) -> Contribuable {
        Contribuable {
            id: id.into(),
            nif: format!("12345678{}", id),
            raison_sociale: format!("SARL Dépôt {}", id),
            centre_gestionnaire: "CIME EST".into(),
            documents: "Statuts".into(),
            quantite: 3,
            a_jour: true,
            rejet: false,
            date_rejet: None,
            motif_rejet: None,
            date_depot: date(2023, 5, 8),
            date_arrivee_immat: arrival,
            date_livraison_sg: delivery,
            observation: None,
        }
    }

    fn three_rows() -> Vec<Contribuable> {
        vec![
            dossier("1", date(2023, 5, 10), date(2023, 5, 15)),
            dossier("2", date(2023, 6, 1), None),
            dossier("3", date(2023, 7, 20), date(2023, 7, 18)),
        ]
    }

    #[test]
    fn test_row_formatting() {
        let rows = three_rows();
        let cells = rows[0].to_row();
        assert_eq!(cells.len(), COLUMNS.len());
        assert_eq!(cells[5], "Oui");
        assert_eq!(cells[6], "Non");
        assert_eq!(cells[8], "10/05/2023");
        assert_eq!(cells[9], "15/05/2023");
        assert_eq!(cells[10], "5");

        assert_eq!(rows[1].to_row()[9], "-");
        assert_eq!(rows[1].to_row()[10], "0");
        // Выдача раньше поступления
        assert_eq!(rows[2].to_row()[10], "0");
    }

    #[test]
    fn test_xlsx_export_matches_screen() {
        let rows = three_rows();
        let table = ExportTable::from_rows("Contribuables", &rows).unwrap();
        let bytes = encode_xlsx(&table).unwrap();

        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range_at(0).unwrap().unwrap();
        let grid: Vec<Vec<String>> = range
            .rows()
            .map(|r| {
                r.iter()
                    .map(|c| match c {
                        Data::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .collect();

        let mut expected = vec![COLUMNS.iter().map(|h| h.to_string()).collect::<Vec<_>>()];
        expected.extend(rows.iter().map(TableExportable::to_row));
        assert_eq!(grid, expected);
        assert_eq!(grid[1][8], format_date(rows[0].date_arrivee_immat));
    }

    #[test]
    fn test_pdf_export_matches_screen() {
        let rows = three_rows();
        let table = ExportTable::from_rows("Contribuables", &rows).unwrap();
        let bytes = encode_pdf(&table).unwrap();

        let pages = page_text_blocks(&bytes);
        assert_eq!(pages.len(), 1);
        let texts = &pages[0];

        // Заголовок документа, шапка, 3 строки, подвал
        assert_eq!(texts.len(), 1 + COLUMNS.len() + 3 * COLUMNS.len() + 1);
        let headers: Vec<Vec<u8>> = COLUMNS.iter().map(|h| encode_win_ansi(h)).collect();
        assert_eq!(texts[1..=COLUMNS.len()].to_vec(), headers);

        for (i, row) in rows.iter().enumerate() {
            let start = 1 + COLUMNS.len() * (i + 1);
            let expected: Vec<Vec<u8>> = row.to_row().iter().map(|v| encode_win_ansi(v)).collect();
            assert_eq!(texts[start..start + COLUMNS.len()].to_vec(), expected);
        }
    }

    #[test]
    fn test_pdf_keeps_long_values_whole() {
        let mut row = dossier("9", date(2023, 5, 10), date(2023, 5, 15));
        row.raison_sociale = "COMPAGNIE GENERALE DES EAUX DE COTE D'IVOIRE".into();
        row.centre_gestionnaire = "CENTRE DES MOYENNES ENTREPRISES DE YOPOUGON".into();
        row.documents = "Statuts, Registre de commerce, Déclaration fiscale d'existence, \
                         Attestation de régularité fiscale"
            .into();
        let rows = vec![row];
        let table = ExportTable::from_rows("Contribuables", &rows).unwrap();
        let bytes = encode_pdf(&table).unwrap();

        let pages = page_text_blocks(&bytes);
        assert_eq!(pages.len(), 1);
        let texts = &pages[0];
        assert_eq!(texts.len(), 1 + 2 * COLUMNS.len() + 1);

        // Шапка PDF совпадает с шапкой xlsx
        let headers: Vec<Vec<u8>> = COLUMNS.iter().map(|h| encode_win_ansi(h)).collect();
        assert_eq!(texts[1..=COLUMNS.len()].to_vec(), headers);

        let expected: Vec<Vec<u8>> = rows[0].to_row().iter().map(|v| encode_win_ansi(v)).collect();
        assert_eq!(texts[1 + COLUMNS.len()..1 + 2 * COLUMNS.len()].to_vec(), expected);

        // Длинные значения перенесены, а не обрезаны
        let doc = Document::load_mem(&bytes).unwrap();
        let page_id = *doc.get_pages().values().next().unwrap();
        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        let lines = content.operations.iter().filter(|op| op.operator == "Tj").count();
        assert!(lines > texts.len());
        assert!(!texts.iter().any(|t| t.ends_with(b"...")));
    }
}
