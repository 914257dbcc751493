pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod excel_importer;
pub mod export;
pub mod icons;
pub mod list_query;
pub mod pagination;
pub mod result_set;
pub mod url_state;
