use contracts::usecases::u502_commit_spreadsheets::{CommitRequest, DEFAULT_COMMIT_MESSAGE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::date_utils::now_local_pt_br;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;

// Ключ localStorage для метки последнего коммита
const LAST_COMMIT_KEY: &str = "u502_last_commit";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_last_commit() -> Option<String> {
    storage().and_then(|s| s.get_item(LAST_COMMIT_KEY).ok().flatten())
}

fn save_last_commit(label: &str) {
    if let Some(s) = storage() {
        let _ = s.set_item(LAST_COMMIT_KEY, label);
    }
}

pub fn commit_label(local_timestamp: &str) -> String {
    format!("Commit realizado - {}", local_timestamp)
}

/// Кнопка "Fazer Commit" + метка последнего коммита
#[component]
pub fn CommitAction() -> impl IntoView {
    let notifications = use_notifications();
    let (is_committing, set_is_committing) = signal(false);
    let (last_commit, set_last_commit) = signal(load_last_commit());

    let on_commit = move |_| {
        set_is_committing.set(true);
        spawn_local(async move {
            match api::commit(CommitRequest::with_message(DEFAULT_COMMIT_MESSAGE)).await {
                Ok(_) => {
                    let label = commit_label(&now_local_pt_br());
                    save_last_commit(&label);
                    set_last_commit.set(Some(label));
                    notifications.success(
                        "Commit realizado com sucesso!",
                        Some("As planilhas foram atualizadas no servidor.".to_string()),
                    );
                }
                Err(e) => {
                    log::error!("Commit failed: {}", e);
                    notifications.error(
                        "Erro no commit",
                        Some("Não foi possível realizar o commit no git.".to_string()),
                    );
                }
            }
            set_is_committing.set(false);
        });
    };

    view! {
        <div class="action">
            <Button
                appearance=ButtonAppearance::Primary
                on_click=on_commit
                disabled=Signal::derive(move || is_committing.get())
            >
                {icon("git-commit")}
                {move || if is_committing.get() { " Fazendo commit..." } else { " Fazer Commit" }}
            </Button>
            {move || last_commit.get().map(|label| view! {
                <div class="action__last">
                    <span class="form__label">"Último commit:"</span>
                    <span>{label}</span>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_label() {
        assert_eq!(
            commit_label("15/03/2024, 14:02:26"),
            "Commit realizado - 15/03/2024, 14:02:26"
        );
    }
}
