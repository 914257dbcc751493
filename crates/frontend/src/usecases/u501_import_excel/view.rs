use super::{api, validate_file};
use crate::layout::global_context::{use_global_context, Page};
use crate::layout::toast_service::use_toasts;
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::use_config;
use crate::shared::excel_importer::{decode_workbook, read_file_bytes, SheetPreview};
use crate::shared::icons::icon;
use contracts::usecases::u501_import_excel::{ImportResponse, EXPECTED_COLUMNS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

fn format_size(bytes: f64) -> String {
    format!("{:.2} Mo", bytes / (1024.0 * 1024.0))
}

/// Страница импорта: выбор файла, предпросмотр первых строк и загрузка
#[component]
pub fn ImportExcelPage() -> impl IntoView {
    let ctx = use_global_context();
    let toasts = use_toasts();
    let config = StoredValue::new(use_config());

    // File не Send, поэтому локальное хранилище
    let selected = StoredValue::new_local(None::<File>);
    let file_label = RwSignal::new(None::<String>);
    let preview = RwSignal::new(None::<SheetPreview>);
    let error = RwSignal::new(None::<String>);
    let result = RwSignal::new(None::<ImportResponse>);
    let is_reading = RwSignal::new(false);
    let is_uploading = RwSignal::new(false);

    let clear = move || {
        selected.set_value(None);
        file_label.set(None);
        preview.set(None);
        error.set(None);
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let file = input.files().and_then(|files| files.get(0));
        clear();
        result.set(None);

        let Some(file) = file else {
            return;
        };
        let name = file.name();
        let size = file.size() as u64;
        if let Err(e) = config.with_value(|c| validate_file(&name, size, &file.type_(), c)) {
            log::warn!("import: '{}' refused: {}", name, e);
            error.set(Some(e.to_string()));
            input.set_value("");
            return;
        }

        file_label.set(Some(format!("{} ({})", name, format_size(file.size()))));
        selected.set_value(Some(file.clone()));
        is_reading.set(true);

        let limit = config.with_value(|c| c.preview_row_limit);
        spawn_local(async move {
            let parsed = match read_file_bytes(&file).await {
                Ok(bytes) => decode_workbook(&bytes)
                    .and_then(|grid| SheetPreview::from_grid(&name, grid, limit)),
                Err(e) => Err(e),
            };
            match parsed {
                Ok(p) => preview.set(Some(p)),
                Err(e) => {
                    log::error!("import preview of '{}' failed: {}", name, e);
                    error.set(Some(e.to_string()));
                }
            }
            is_reading.set(false);
        });
    };

    let on_upload = move |_: leptos::ev::MouseEvent| {
        let Some(file) = selected.get_value() else {
            error.set(Some(super::ImportValidationError::NoFile.to_string()));
            return;
        };
        let base = config.with_value(|c| c.api_base.clone());
        is_uploading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::upload(&base, &file).await {
                Ok(response) => {
                    toasts.success(
                        "Import terminé",
                        &format!(
                            "{} dossier(s) importé(s) sur {}",
                            response.imported_count, response.total_count
                        ),
                    );
                    result.set(Some(response));
                    clear();
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    toasts.error("Échec de l'import", &e.to_string());
                }
            }
            is_uploading.set(false);
        });
    };

    let preview_view = move || {
        preview.get().map(|p| {
            let shown = p.rows.len();
            view! {
                <section class="import-preview">
                    <h2 class="form-section__title">"Aperçu"</h2>
                    <p class="import-preview__info">
                        {format!("{} : {} ligne(s) affichée(s) sur {}", p.file_name, shown, p.total_rows)}
                    </p>
                    <div class="table-container">
                        <table class="data-table">
                            <thead>
                                <tr>{p.headers.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}</tr>
                            </thead>
                            <tbody>
                                {p.rows
                                    .into_iter()
                                    .map(|row| view! {
                                        <tr>{row.into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}</tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                </section>
            }
        })
    };

    let result_view = move || {
        result.get().map(|r| {
            let skipped = r.skipped_count();
            view! {
                <div class="alert alert--success">
                    {icon("check")}
                    <div>
                        <strong>{format!("{} / {} dossier(s) importé(s)", r.imported_count, r.total_count)}</strong>
                        <p>{r.message}</p>
                        {(skipped > 0).then(|| view! {
                            <p class="text-muted">{format!("{} ligne(s) ignorée(s)", skipped)}</p>
                        })}
                    </div>
                    <button class="btn btn--link" on:click=move |_| ctx.navigate(Page::Consultation)>
                        "Voir les dossiers"
                    </button>
                </div>
            }
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Import Excel" subtitle="Importer des dossiers depuis un fichier .xlsx ou .xls".to_string() />

            <section class="import-dropzone">
                {icon("excel")}
                <label class="btn btn--secondary" for="importFile">"Choisir un fichier"</label>
                <input
                    type="file"
                    id="importFile"
                    class="visually-hidden"
                    accept=".xlsx,.xls"
                    on:change=on_file_change
                    disabled=move || is_uploading.get()
                />
                <span class="import-dropzone__file">
                    {move || file_label.get().unwrap_or_else(|| "Aucun fichier sélectionné".to_string())}
                </span>
                <span class="text-muted">
                    {move || format!("Taille maximale : {} Mo", config.with_value(|c| c.max_import_size / (1024 * 1024)))}
                </span>
            </section>

            {move || error.get().map(|e| view! {
                <div class="alert alert--error">{icon("x-circle")}<span>{e}</span></div>
            })}

            {move || is_reading.get().then(|| view! { <p class="text-muted">"Lecture du fichier..."</p> })}

            {preview_view}

            <div class="form-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || file_label.with(Option::is_none) || is_uploading.get())
                    on_click=on_upload
                >
                    {icon("upload")}
                    {move || if is_uploading.get() { "Import en cours..." } else { "Importer" }}
                </Button>
            </div>

            {result_view}

            <section class="import-guide">
                <h2 class="form-section__title">"Format attendu"</h2>
                <p>"La première ligne du fichier doit contenir les en-têtes suivants :"</p>
                <ol>
                    {EXPECTED_COLUMNS
                        .into_iter()
                        .map(|(name, required)| view! {
                            <li>
                                {name}
                                {(!required).then(|| view! { <span class="text-muted">" (optionnel)"</span> })}
                            </li>
                        })
                        .collect_view()}
                </ol>
            </section>
        </div>
    }
}
