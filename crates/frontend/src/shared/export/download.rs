//! Скачивание сгенерированного файла через Blob и временную ссылку
use super::ExportError;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Инициирует скачивание `bytes` под именем `filename`
pub fn download_bytes(bytes: &[u8], mime_type: &str, filename: &str) -> Result<(), ExportError> {
    let blob = create_blob(bytes, mime_type)?;
    download_blob(&blob, filename)
}

fn create_blob(bytes: &[u8], mime_type: &str) -> Result<Blob, ExportError> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);

    let properties = BlobPropertyBag::new();
    properties.set_type(mime_type);

    Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
        .map_err(|e| ExportError::Download(format!("Blob: {:?}", e)))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), ExportError> {
    let fail = |what: &str| ExportError::Download(what.to_string());

    let window = web_sys::window().ok_or_else(|| fail("no window"))?;
    let document = window.document().ok_or_else(|| fail("no document"))?;
    let body = document.body().ok_or_else(|| fail("no body"))?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| ExportError::Download(format!("object URL: {:?}", e)))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| ExportError::Download(format!("anchor: {:?}", e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| ExportError::Download(format!("anchor cast: {:?}", e)))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| ExportError::Download(format!("style: {:?}", e)))?;

    // Добавляем в DOM, кликаем и удаляем
    body.append_child(&anchor)
        .map_err(|e| ExportError::Download(format!("append: {:?}", e)))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| ExportError::Download(format!("remove: {:?}", e)))?;

    Url::revoke_object_url(&url)
        .map_err(|e| ExportError::Download(format!("revoke: {:?}", e)))?;

    Ok(())
}
