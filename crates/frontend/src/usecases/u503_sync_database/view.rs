use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;

/// Кнопка "Atualizar Base"
#[component]
pub fn SyncAction() -> impl IntoView {
    let notifications = use_notifications();
    let (is_syncing, set_is_syncing) = signal(false);

    let on_sync = move |_| {
        set_is_syncing.set(true);
        spawn_local(async move {
            match api::sync_database().await {
                Ok(_) => notifications.success(
                    "Base de dados atualizada!",
                    Some("Os dados foram sincronizados com sucesso.".to_string()),
                ),
                Err(e) => {
                    log::error!("Database sync failed: {}", e);
                    notifications.error(
                        "Erro na atualização",
                        Some("Não foi possível atualizar a base de dados.".to_string()),
                    );
                }
            }
            set_is_syncing.set(false);
        });
    };

    view! {
        <div class="action">
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=on_sync
                disabled=Signal::derive(move || is_syncing.get())
            >
                {icon("refresh")}
                {move || if is_syncing.get() { " Atualizando..." } else { " Atualizar Base" }}
            </Button>
        </div>
    }
}
