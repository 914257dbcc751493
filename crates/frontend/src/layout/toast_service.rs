use crate::shared::icons::icon;
use leptos::prelude::*;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Очередь уведомлений без реактивности
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, title: &str, description: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Toast {
            id,
            kind,
            title: title.to_string(),
            description: description.to_string(),
        });
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Сервис уведомлений; каждое закрывается само через `timeout_ms`
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    timeout_ms: u32,
}

impl ToastService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            timeout_ms,
        }
    }

    pub fn success(&self, title: &str, description: &str) {
        self.push(ToastKind::Success, title, description);
    }

    pub fn error(&self, title: &str, description: &str) {
        log::error!("{}: {}", title, description);
        self.push(ToastKind::Error, title, description);
    }

    pub fn dismiss(&self, id: Uuid) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn push(&self, kind: ToastKind, title: &str, description: &str) {
        let Some(id) = self.queue.try_update(|q| q.push(kind, title, description)) else {
            return;
        };

        let this = *self;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(this.timeout_ms).await;
            // Сигнал мог быть уже уничтожен
            this.queue.try_update(|q| q.dismiss(id));
        });
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Стопка уведомлений в правом нижнем углу
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let (class, icon_name) = match toast.kind {
                        ToastKind::Success => ("toast toast--success", "check"),
                        ToastKind::Error => ("toast toast--error", "x-circle"),
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status">
                            <div class="toast__icon">{icon(icon_name)}</div>
                            <div class="toast__body">
                                <div class="toast__title">{toast.title}</div>
                                <div class="toast__description">{toast.description}</div>
                            </div>
                            <button class="toast__close" on:click=move |_| toasts.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Import terminé", "48 / 50");
        let second = queue.push(ToastKind::Error, "Erreur", "HTTP 500");
        assert_eq!(queue.items().len(), 2);

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, second);
        assert_eq!(queue.items()[0].kind, ToastKind::Error);

        // Повторное закрытие ничего не ломает
        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
    }
}
