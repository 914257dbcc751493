use super::model::{DossierDraft, DraftError};
use crate::domain::a001_contribuable::api;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::toast_service::ToastService;
use leptos::prelude::*;

/// ViewModel формы досье.
///
/// Черновик хранится целиком в одном сигнале, view меняет его через
/// `draft.update`. Загрузка и сохранение идут через команды.
#[derive(Clone, Copy)]
pub struct DossierDetailsViewModel {
    pub draft: RwSignal<DossierDraft>,
    pub errors: RwSignal<Vec<DraftError>>,
    pub load_error: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
    id: StoredValue<Option<String>>,
    api_base: StoredValue<String>,
    toasts: ToastService,
    ctx: AppGlobalContext,
}

impl DossierDetailsViewModel {
    pub fn new(
        id: Option<String>,
        api_base: String,
        toasts: ToastService,
        ctx: AppGlobalContext,
    ) -> Self {
        Self {
            draft: RwSignal::new(DossierDraft::default()),
            errors: RwSignal::new(Vec::new()),
            load_error: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            is_saving: RwSignal::new(false),
            id: StoredValue::new(id),
            api_base: StoredValue::new(api_base),
            toasts,
            ctx,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with_value(Option::is_some)
    }

    /// Сообщение для поля, если последняя попытка сохранения его не приняла
    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| DossierDraft::error_for(e, field)))
    }

    /// Загружает досье по id; для нового досье оставляет пустую форму
    pub fn load(&self) {
        let Some(id) = self.id.get_value() else {
            self.draft.set(DossierDraft::default());
            return;
        };

        let this = *self;
        this.is_loading.set(true);
        this.load_error.set(None);
        leptos::task::spawn_local(async move {
            let base = this.api_base.get_value();
            match api::fetch_by_id(&base, &id).await {
                Ok(record) => {
                    log::debug!("a001_contribuable: dossier {} loaded", id);
                    this.draft.set(DossierDraft::from_contribuable(&record));
                }
                Err(e) => {
                    log::error!("a001_contribuable: failed to load {}: {}", id, e);
                    this.load_error.set(Some(e.to_string()));
                }
            }
            this.is_loading.set(false);
        });
    }

    pub fn save_command(&self) {
        let payload = match self.draft.with_untracked(DossierDraft::validate) {
            Ok(payload) => payload,
            Err(errors) => {
                self.errors.set(errors);
                return;
            }
        };
        self.errors.set(Vec::new());

        let this = *self;
        this.is_saving.set(true);
        leptos::task::spawn_local(async move {
            let base = this.api_base.get_value();
            let id = this.id.get_value();
            match api::save(&base, id.as_deref(), &payload).await {
                Ok(()) => {
                    this.toasts.success(
                        "Dossier enregistré",
                        &format!("Le dossier {} a été enregistré", payload.nif),
                    );
                    this.ctx.navigate(Page::Consultation);
                }
                Err(e) => this.toasts.error("Erreur d'enregistrement", &e.to_string()),
            }
            // После навигации страница уже уничтожена
            this.is_saving.try_set(false);
        });
    }

    pub fn cancel_command(&self) {
        self.ctx.navigate(Page::Consultation);
    }
}
