use crate::shared::url_state::{self, ACTIVE_KEY};
use contracts::shared::QueryParams;
use leptos::prelude::*;

/// Параметр адресной строки с id редактируемого досье
pub const DOSSIER_ID_KEY: &str = "id";

/// Страницы консоли
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Dashboard,
    Import,
    Consultation,
    /// Редактирование досье; `None` - создание нового
    Edition(Option<String>),
    Historique,
}

impl Page {
    pub const MENU: [Page; 4] = [
        Page::Dashboard,
        Page::Import,
        Page::Consultation,
        Page::Historique,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "d400_statistiques",
            Page::Import => "u501_import_excel",
            Page::Consultation => "a001_contribuable",
            Page::Edition(_) => "a001_contribuable_details",
            Page::Historique => "a002_historique",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Tableau de bord",
            Page::Import => "Import Excel",
            Page::Consultation => "Consultation",
            Page::Edition(Some(_)) => "Modifier un dossier",
            Page::Edition(None) => "Nouveau dossier",
            Page::Historique => "Historique",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Import => "upload",
            Page::Consultation => "search",
            Page::Edition(_) => "edit",
            Page::Historique => "history",
        }
    }

    /// Восстанавливает страницу из параметров адреса; неизвестный ключ ведёт на главную
    pub fn from_params(params: &QueryParams) -> Self {
        let key = params.get(ACTIVE_KEY).map(String::as_str).unwrap_or_default();
        match key {
            "u501_import_excel" => Page::Import,
            "a001_contribuable" => Page::Consultation,
            "a001_contribuable_details" => Page::Edition(
                params
                    .get(DOSSIER_ID_KEY)
                    .filter(|id| !id.trim().is_empty())
                    .cloned(),
            ),
            "a002_historique" => Page::Historique,
            _ => Page::Dashboard,
        }
    }

    /// Параметры адреса при переходе на страницу
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert(ACTIVE_KEY.to_string(), self.key().to_string());
        if let Page::Edition(Some(id)) = self {
            params.insert(DOSSIER_ID_KEY.to_string(), id.clone());
        }
        params
    }

    /// Подсветка пункта меню: редактирование относится к консультации
    pub fn menu_group(&self) -> Page {
        match self {
            Page::Edition(_) => Page::Consultation,
            other => other.clone(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Читает `?active=...` один раз при старте.
    ///
    /// Адрес здесь не переписывается: в нём могут быть параметры поиска
    /// открываемой страницы.
    pub fn init_router_integration(&self) {
        let params = url_state::read_query();
        let page = Page::from_params(&params);
        leptos::logging::log!("router: restored page '{}'", page.key());
        self.active.set(page);
    }

    /// Переход на страницу; параметры предыдущей страницы из адреса убираются
    pub fn navigate(&self, page: Page) {
        leptos::logging::log!("navigate: '{}'", page.key());
        url_state::write_query(&page.to_params());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_page_round_trip() {
        for page in Page::MENU {
            assert_eq!(Page::from_params(&page.to_params()), page);
        }
        let edit = Page::Edition(Some("64b7".into()));
        assert_eq!(Page::from_params(&edit.to_params()), edit);
        let create = Page::Edition(None);
        assert_eq!(Page::from_params(&create.to_params()), create);
    }

    #[test]
    fn test_unknown_key_falls_back_to_dashboard() {
        assert_eq!(Page::from_params(&QueryParams::new()), Page::Dashboard);
        assert_eq!(
            Page::from_params(&params(&[("active", "a015_wb_orders")])),
            Page::Dashboard
        );
    }

    #[test]
    fn test_search_params_do_not_change_page() {
        let p = params(&[("active", "a001_contribuable"), ("nif", "123"), ("page", "2")]);
        assert_eq!(Page::from_params(&p), Page::Consultation);
    }

    #[test]
    fn test_edition_highlights_consultation() {
        assert_eq!(
            Page::Edition(Some("1".into())).menu_group(),
            Page::Consultation
        );
        assert_eq!(Page::Historique.menu_group(), Page::Historique);
    }
}
