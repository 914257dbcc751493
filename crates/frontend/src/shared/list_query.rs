//! Запуск запроса списка поверх `ResultSetModel` в реактивном сигнале.
use super::api_utils::ApiError;
use super::result_set::{BindOutcome, ResultSetModel};
use super::url_state::{with_active, write_query};
use crate::layout::toast_service::ToastService;
use contracts::shared::{ListResponse, QueryCriteria, QueryParams};
use leptos::prelude::*;
use std::future::Future;

/// Выдаёт новый токен, зеркалит параметры в адресную строку страницы
/// `page_key` и привязывает ответ, если он ещё актуален.
pub fn run_query<C, T, F, Fut>(
    model: RwSignal<ResultSetModel<C, T>>,
    page_key: &'static str,
    toasts: ToastService,
    fetch: F,
) where
    C: QueryCriteria + Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
    F: FnOnce(QueryParams) -> Fut + 'static,
    Fut: Future<Output = Result<ListResponse<T>, ApiError>> + 'static,
{
    let Some(ticket) = model.try_update(|m| m.begin_request()) else {
        return;
    };
    write_query(&with_active(page_key, &ticket.params));

    leptos::task::spawn_local(async move {
        let outcome = fetch(ticket.params).await;
        match model.try_update(|m| m.complete(ticket.token, outcome)) {
            Some(BindOutcome::Bound) => {
                log::debug!("{}: request #{} bound", page_key, ticket.token.value());
            }
            Some(BindOutcome::Superseded) => {
                log::warn!(
                    "{}: response #{} discarded, a newer request is pending",
                    page_key,
                    ticket.token.value()
                );
            }
            Some(BindOutcome::Failed(message)) => {
                toasts.error("Erreur de chargement", &message);
            }
            // Страница уже закрыта
            None => {}
        }
    });
}
