//! Общие контракты консоли: DTO для обмена с REST-бэкендом и чистые
//! правила предметной области (критерии поиска, пагинация, сроки обработки).

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod usecases;
