//! Модель постраничного списка с фильтрами.
//!
//! Один контейнер владеет `(criteria, page)`, выдаёт параметры запроса и
//! принимает ответы. Ответ привязывается, только если его токен совпадает с
//! последним выданным: более ранние запросы, пришедшие позже, отбрасываются.
//! Ошибка запроса не трогает уже показанный результат.

use contracts::shared::paging::total_pages;
use contracts::shared::{to_query_params, ListResponse, Page, QueryCriteria, QueryParams};
use std::fmt::Display;

/// Одна загруженная страница. Заменяется целиком при каждом успешном ответе.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet<T> {
    pub rows: Vec<T>,
    pub total: u64,
    pub page: Page,
    pub total_pages: u32,
}

impl<T> ResultSet<T> {
    /// Все поля берутся из одного ответа
    pub fn from_response(response: ListResponse<T>) -> Self {
        let page = response.pagination.page();
        let total = response.pagination.total;
        Self {
            rows: response.data,
            total,
            page,
            total_pages: total_pages(total, page.size()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// То, что показывает подвал списка. Берётся из привязанного результата,
/// чтобы номер страницы и строки таблицы всегда были из одного ответа.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterState {
    pub page: Page,
    pub total_pages: u32,
    pub total: u64,
}

/// Токен запроса, монотонно растёт
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Выданный запрос: токен и параметры, которые надо отправить
#[derive(Debug, Clone, PartialEq)]
pub struct RequestTicket {
    pub token: RequestToken,
    pub params: QueryParams,
}

/// Что произошло с пришедшим ответом
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindOutcome {
    Bound,
    Failed(String),
    /// Пришёл ответ на уже устаревший запрос
    Superseded,
}

#[derive(Debug, Clone)]
pub struct ResultSetModel<C, T> {
    criteria: C,
    page: Page,
    result: Option<ResultSet<T>>,
    state: LoadState,
    last_issued: u64,
}

impl<C, T> ResultSetModel<C, T>
where
    C: QueryCriteria + Clone,
{
    pub fn new(criteria: C, page: Page) -> Self {
        Self {
            criteria,
            page,
            result: None,
            state: LoadState::Idle,
            last_issued: 0,
        }
    }

    pub fn criteria(&self) -> &C {
        &self.criteria
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn result(&self) -> Option<&ResultSet<T>> {
        self.result.as_ref()
    }

    pub fn rows(&self) -> &[T] {
        self.result.as_ref().map(|r| r.rows.as_slice()).unwrap_or(&[])
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Число страниц последнего привязанного результата (0, пока ничего нет)
    pub fn total_pages(&self) -> u32 {
        self.result.as_ref().map(|r| r.total_pages).unwrap_or(0)
    }

    /// Пока ничего не загружено, подвал показывает запрошенную страницу
    /// и пустой итог
    pub fn footer(&self) -> FooterState {
        match &self.result {
            Some(r) => FooterState {
                page: r.page,
                total_pages: r.total_pages,
                total: r.total,
            },
            None => FooterState {
                page: self.page,
                total_pages: 0,
                total: 0,
            },
        }
    }

    /// Новый поиск всегда начинается с первой страницы
    pub fn set_criteria(&mut self, criteria: C) {
        self.criteria = criteria;
        self.page = self.page.with_index(1);
    }

    pub fn go_to_page(&mut self, index: u32) {
        let page = self.page.with_index(index);
        self.page = match &self.result {
            Some(r) => page.clamped(r.total_pages),
            None => page,
        };
    }

    pub fn set_page_size(&mut self, size: u32) {
        self.page = self.page.with_size(size);
    }

    pub fn query_params(&self) -> QueryParams {
        to_query_params(&self.criteria, self.page)
    }

    /// Выдаёт новый токен и переводит модель в `Loading`
    pub fn begin_request(&mut self) -> RequestTicket {
        self.last_issued += 1;
        self.state = LoadState::Loading;
        RequestTicket {
            token: RequestToken(self.last_issued),
            params: self.query_params(),
        }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.last_issued
    }

    /// Привязывает ответ на запрос `token`.
    ///
    /// Устаревший ответ не меняет ничего, ни результат, ни состояние.
    pub fn complete<E: Display>(
        &mut self,
        token: RequestToken,
        outcome: Result<ListResponse<T>, E>,
    ) -> BindOutcome {
        if !self.is_current(token) {
            return BindOutcome::Superseded;
        }

        match outcome {
            Ok(response) => {
                self.result = Some(ResultSet::from_response(response));
                self.state = LoadState::Loaded;
                BindOutcome::Bound
            }
            Err(e) => {
                let message = e.to_string();
                self.state = LoadState::Failed(message.clone());
                BindOutcome::Failed(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_contribuable::SearchCriteria;
    use contracts::shared::PaginationMeta;
    use pretty_assertions::assert_eq;

    type Model = ResultSetModel<SearchCriteria, &'static str>;

    fn response(rows: Vec<&'static str>, total: u64, page: u32, size: u32) -> ListResponse<&'static str> {
        ListResponse {
            success: true,
            data: rows,
            pagination: PaginationMeta {
                total,
                page,
                page_size: size,
                total_pages: 0,
            },
            message: None,
        }
    }

    #[test]
    fn test_nif_search_single_page() {
        let mut model = Model::new(SearchCriteria::default(), Page::default());
        model.set_criteria(SearchCriteria {
            nif: Some("123".into()),
            ..Default::default()
        });

        let ticket = model.begin_request();
        assert_eq!(ticket.params.get("nif").map(String::as_str), Some("123"));
        assert_eq!(ticket.params.get("page").map(String::as_str), Some("1"));
        assert_eq!(ticket.params.get("pageSize").map(String::as_str), Some("10"));
        assert!(model.is_loading());

        let outcome = model.complete::<String>(ticket.token, Ok(response(vec!["a", "b"], 2, 1, 10)));
        assert_eq!(outcome, BindOutcome::Bound);
        assert_eq!(model.rows(), &["a", "b"]);
        assert_eq!(model.total_pages(), 1);
        assert!(!crate::shared::pagination::navigation_enabled(model.total_pages()));
        assert_eq!(model.state(), &LoadState::Loaded);
    }

    #[test]
    fn test_late_response_of_older_request_is_discarded() {
        let mut model = Model::new(SearchCriteria::default(), Page::default());
        let first = model.begin_request();
        model.complete::<String>(first.token, Ok(response(vec!["p1"], 50, 1, 10)));

        model.go_to_page(2);
        let page2 = model.begin_request();
        model.go_to_page(3);
        let page3 = model.begin_request();

        // Страница 3 приходит первой, страница 2 последней
        assert_eq!(
            model.complete::<String>(page3.token, Ok(response(vec!["p3"], 50, 3, 10))),
            BindOutcome::Bound
        );
        assert_eq!(
            model.complete::<String>(page2.token, Ok(response(vec!["p2"], 50, 2, 10))),
            BindOutcome::Superseded
        );

        let bound = model.result().unwrap();
        assert_eq!(bound.page.index(), 3);
        assert_eq!(bound.rows, vec!["p3"]);
        assert_eq!(model.state(), &LoadState::Loaded);
    }

    #[test]
    fn test_superseded_failure_does_not_touch_state() {
        let mut model = Model::new(SearchCriteria::default(), Page::default());
        let old = model.begin_request();
        let new = model.begin_request();

        assert_eq!(
            model.complete::<&str>(old.token, Err("timeout")),
            BindOutcome::Superseded
        );
        assert!(model.is_loading());

        model.complete::<String>(new.token, Ok(response(vec!["x"], 1, 1, 10)));
        assert_eq!(model.rows(), &["x"]);
    }

    #[test]
    fn test_failure_keeps_previous_result() {
        let mut model = Model::new(SearchCriteria::default(), Page::default());
        let first = model.begin_request();
        model.complete::<String>(first.token, Ok(response(vec!["a", "b"], 12, 1, 10)));

        model.go_to_page(2);
        let second = model.begin_request();
        let outcome = model.complete::<&str>(second.token, Err("Erreur HTTP 500"));

        assert_eq!(outcome, BindOutcome::Failed("Erreur HTTP 500".into()));
        assert_eq!(model.rows(), &["a", "b"]);
        assert_eq!(model.state(), &LoadState::Failed("Erreur HTTP 500".into()));
        // Подвал остаётся на странице показанных строк
        let footer = model.footer();
        assert_eq!(footer.page, model.result().unwrap().page);
        assert_eq!(footer.page.index(), 1);
        assert_eq!(footer.total_pages, 2);
        assert_eq!(footer.total, 12);
        // Повтор запроса страницы 2 возможен
        assert_eq!(model.query_params().get("page").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_footer_follows_bound_result_only() {
        let mut model = Model::new(SearchCriteria::default(), Page::default());
        assert_eq!(
            model.footer(),
            FooterState {
                page: Page::default(),
                total_pages: 0,
                total: 0,
            }
        );

        let first = model.begin_request();
        model.complete::<String>(first.token, Ok(response(vec!["p1"], 30, 1, 10)));

        // Запрос в полёте: подвал не прыгает вперёд
        model.go_to_page(2);
        let second = model.begin_request();
        assert_eq!(model.footer().page.index(), 1);

        // Ошибка: строки и подвал по-прежнему со страницы 1
        model.complete::<&str>(second.token, Err("Erreur réseau"));
        assert_eq!(model.rows(), &["p1"]);
        assert_eq!(model.footer().page.index(), 1);

        // Смена размера без ответа тоже не меняет подвал
        model.set_page_size(50);
        assert_eq!(model.footer().page.size(), 10);

        let third = model.begin_request();
        model.complete::<String>(third.token, Ok(response(vec!["q1"], 30, 1, 50)));
        assert_eq!(model.footer().page, Page::new(1, 50));
        assert_eq!(model.footer().total_pages, 1);
    }

    #[test]
    fn test_total_pages_computed_from_total() {
        let mut model = Model::new(SearchCriteria::default(), Page::default());
        let t = model.begin_request();
        // totalPages бэкенда не передан
        model.complete::<String>(t.token, Ok(response(vec![], 95, 1, 10)));
        assert_eq!(model.total_pages(), 10);
    }

    #[test]
    fn test_navigation_and_criteria_reset_page() {
        let mut model = Model::new(SearchCriteria::default(), Page::new(1, 10));
        let t = model.begin_request();
        model.complete::<String>(t.token, Ok(response(vec!["a"], 40, 1, 10)));

        model.go_to_page(9);
        assert_eq!(model.page().index(), 4);

        model.go_to_page(3);
        model.set_page_size(50);
        assert_eq!(model.page(), Page::new(1, 50));

        model.go_to_page(2);
        model.set_criteria(SearchCriteria {
            rejet: Some(true),
            ..Default::default()
        });
        assert_eq!(model.page().index(), 1);
        assert_eq!(model.page().size(), 50);
    }
}
