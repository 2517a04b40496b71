use contracts::system::status::StatusResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

/// Карточка состояния сервера
#[component]
pub fn StatusCard() -> impl IntoView {
    // None — ещё загружается, Some(Err) — сервер недоступен
    let (status, set_status) = signal(None::<Result<StatusResponse, String>>);

    Effect::new(move || {
        spawn_local(async move {
            let result = api::fetch_status().await;
            if let Err(e) = &result {
                log::warn!("Status request failed: {}", e);
            }
            set_status.set(Some(result));
        });
    });

    view! {
        <div class="card">
            <div class="card__header">
                {icon("server")}
                <h2 class="section-title">"Status do Sistema"</h2>
            </div>
            <div class="card__body">
                {move || match status.get() {
                    None => view! { <Spinner /> }.into_any(),
                    Some(Ok(s)) => {
                        let color = if s.is_online() { BadgeColor::Success } else { BadgeColor::Warning };
                        let label = s.status.clone();
                        view! {
                            <div class="status">
                                <Badge appearance=BadgeAppearance::Filled color=color>
                                    {label}
                                </Badge>
                                <span class="status__line">"Versão: " {s.version.clone()}</span>
                                <span class="status__line">"Verificado em: " {format_datetime(&s.timestamp)}</span>
                            </div>
                        }.into_any()
                    }
                    Some(Err(_)) => view! {
                        <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Danger>
                            "offline"
                        </Badge>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
