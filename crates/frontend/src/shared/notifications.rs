//! Всплывающие уведомления (toasts)
//!
//! Хранилище живёт в контексте приложения; любая страница добавляет
//! уведомление через `use_notifications()`, `NotificationHost` их рисует.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// Сколько уведомление висит на экране
pub const NOTIFICATION_TTL_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn css_modifier(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast--success",
            NotificationKind::Error => "toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Clone, Copy)]
pub struct NotificationStore {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn success(&self, title: impl Into<String>, description: Option<String>) {
        self.push(NotificationKind::Success, title.into(), description);
    }

    pub fn error(&self, title: impl Into<String>, description: Option<String>) {
        self.push(NotificationKind::Error, title.into(), description);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Signal<Vec<Notification>> {
        self.items.into()
    }

    fn push(&self, kind: NotificationKind, title: String, description: Option<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| {
            items.push(Notification {
                id,
                kind,
                title,
                description,
            })
        });

        let store = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTIFICATION_TTL_MS).await;
            store.dismiss(id);
        });
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationStore {
    use_context::<NotificationStore>().expect("NotificationStore context not found")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let store = use_notifications();

    view! {
        <div class="toast-host">
            <For
                each=move || store.items().get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=format!("toast {}", n.kind.css_modifier())>
                            <div class="toast__body">
                                <strong class="toast__title">{n.title}</strong>
                                {n.description.map(|d| view! { <span class="toast__description">{d}</span> })}
                            </div>
                            <button class="toast__close" on:click=move |_| store.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
