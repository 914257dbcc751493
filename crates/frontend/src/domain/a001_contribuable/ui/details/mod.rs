//! Форма досье (MVVM):
//! - model.rs: черновик формы и его проверка
//! - view_model.rs: загрузка и сохранение через REST
//! - view.rs: компонент Leptos

mod model;
mod view;
mod view_model;

pub use view::ContribuableDetails;
