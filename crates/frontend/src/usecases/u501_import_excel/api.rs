use crate::shared::api_utils::{post_form, ApiError};
use contracts::usecases::u501_import_excel::ImportResponse;
use web_sys::{File, FormData};

const IMPORT_PATH: &str = "/api/import";

/// Отправляет файл полем `file` формы multipart
pub async fn upload(api_base: &str, file: &File) -> Result<ImportResponse, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    let response: ImportResponse = post_form(&format!("{}{}", api_base, IMPORT_PATH), form).await?;
    if !response.success {
        return Err(ApiError::rejected(Some(response.message).filter(|m| !m.is_empty())));
    }
    log::info!(
        "import: {} / {} rows accepted",
        response.imported_count,
        response.total_count
    );
    Ok(response)
}
