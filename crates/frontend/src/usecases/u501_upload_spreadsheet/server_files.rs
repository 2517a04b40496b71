use contracts::shared::files::FileEntry;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

/// Карточка "Planilhas no servidor" (GET /api/files)
///
/// Перечитывает список при изменении `version` и по кнопке.
#[component]
pub fn ServerFiles(#[prop(into)] version: Signal<u32>) -> impl IntoView {
    let (entries, set_entries) = signal(Vec::<FileEntry>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error_msg, set_error_msg) = signal(None::<String>);
    let manual_refresh = RwSignal::new(0u32);

    Effect::new(move || {
        version.track();
        manual_refresh.track();
        set_is_loading.set(true);
        spawn_local(async move {
            match api::list_files().await {
                Ok(response) => {
                    set_entries.set(response.files);
                    set_error_msg.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load server files: {}", e);
                    set_error_msg.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    });

    view! {
        <div class="card">
            <div class="card__header">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h2 class="section-title">"Planilhas no servidor"</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        disabled=Signal::derive(move || is_loading.get())
                        on_click=move |_| manual_refresh.update(|v| *v += 1)
                    >
                        {icon("refresh")}
                    </Button>
                </Flex>
            </div>
            <div class="card__body">
                {move || error_msg.get().map(|err| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__text">{format!("Erro ao listar arquivos: {}", err)}</span>
                    </div>
                })}
                {move || {
                    let list = entries.get();
                    if list.is_empty() {
                        view! { <p class="card__description">"Nenhuma planilha enviada ainda."</p> }.into_any()
                    } else {
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Arquivo"</th>
                                        <th>"Tamanho"</th>
                                        <th>"Modificado"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list.into_iter().map(|entry| view! {
                                        <tr>
                                            <td>{entry.name.clone()}</td>
                                            <td>{entry.size_display()}</td>
                                            <td>{format_datetime(&entry.modified)}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
