use contracts::domain::a001_stock_item::{Item, LookupOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::item_card::ItemCard;
use super::search_input::SearchInput;
use crate::domain::a001_stock_item::use_lookup_source;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LOOKUP};

/// Страница "Consulta": поиск товара по коду
#[component]
pub fn LookupPage() -> impl IntoView {
    let source = use_lookup_source();
    let notifications = use_notifications();

    let (loading, set_loading) = signal(false);
    let (item, set_item) = signal(None::<Item>);
    let (error, set_error) = signal(None::<&'static str>);

    let sample_codes = source.sample_codes().join(", ");
    let source = StoredValue::new(source);

    let on_search = Callback::new(move |code: String| {
        set_loading.set(true);
        set_error.set(None);
        set_item.set(None);

        let source = source.get_value();
        spawn_local(async move {
            let Some(outcome) = source.lookup(&code).await else {
                set_loading.set(false);
                return;
            };
            match &outcome {
                LookupOutcome::Found(found) => {
                    notifications.success(
                        "Item encontrado!",
                        Some(format!("{} foi localizado no estoque.", found.description)),
                    );
                }
                LookupOutcome::NotFound => {
                    notifications.error(
                        "Item não encontrado",
                        Some("O código informado não existe no estoque.".to_string()),
                    );
                }
                LookupOutcome::Failed(_) => {
                    notifications.error(
                        "Erro na busca",
                        Some("Ocorreu um erro ao consultar o estoque.".to_string()),
                    );
                }
            }
            set_error.set(outcome.error_message());
            set_item.set(outcome.item().cloned());
            set_loading.set(false);
        });
    });

    view! {
        <PageFrame
            page_id="a001_stock_item--lookup"
            category=PAGE_CAT_LOOKUP
            title="Controle de Estoque"
            subtitle="Digite o código do item para consultar informações detalhadas sobre estoque, preço e localização no depósito."
        >
            <SearchInput loading=loading on_search=on_search />

            <div class="lookup__results">
                {move || error.get().map(|message| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">{icon("alert-circle")}</span>
                        <span class="warning-box__text">{message}</span>
                    </div>
                })}
                {move || item.get().map(|item| view! { <ItemCard item=item /> })}
            </div>

            <Show when=move || !loading.get() && item.get().is_none() && error.get().is_none()>
                <p class="lookup__hint">
                    "Códigos de exemplo para teste: " {sample_codes.clone()}
                </p>
            </Show>
        </PageFrame>
    }
}
