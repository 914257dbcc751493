use thiserror::Error;

/// Ошибки разбора значений, пришедших по сети или из адресной строки
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("Date invalide : {0}")]
    InvalidDate(String),

    #[error("Valeur Oui/Non invalide : {0}")]
    InvalidFlag(String),

    #[error("Type de date inconnu : {0}")]
    UnknownDateField(String),
}
