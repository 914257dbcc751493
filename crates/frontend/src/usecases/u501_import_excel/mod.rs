//! Импорт досье из Excel: проверка файла, предпросмотр, загрузка на сервер.

pub mod api;
pub mod view;

pub use view::ImportExcelPage;

use crate::shared::config::ConsoleConfig;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportValidationError {
    #[error("Le fichier dépasse la taille maximale de {max_mb} Mo")]
    FileTooLarge { size: u64, max_mb: u64 },
    #[error("Format non supporté: {0}. Utilisez un fichier .xlsx ou .xls")]
    UnsupportedType(String),
    #[error("Aucun fichier sélectionné")]
    NoFile,
}

fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.trim().to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// Проверяет файл до чтения: сначала тип, потом размер.
///
/// Если браузер не сообщил MIME-тип, решает расширение имени.
pub fn validate_file(
    name: &str,
    size: u64,
    mime: &str,
    config: &ConsoleConfig,
) -> Result<(), ImportValidationError> {
    let mime = mime.trim();
    let type_ok = if mime.is_empty() {
        extension(name)
            .map(|ext| config.accepted_extensions.contains(&ext.as_str()))
            .unwrap_or(false)
    } else {
        config.accepted_mime_types.contains(&mime)
    };
    if !type_ok {
        let shown = if mime.is_empty() { name } else { mime };
        return Err(ImportValidationError::UnsupportedType(shown.to_string()));
    }

    if size > config.max_import_size {
        return Err(ImportValidationError::FileTooLarge {
            size,
            max_mb: config.max_import_size / (1024 * 1024),
        });
    }
    Ok(())
}
