use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Поле ввода кода + кнопка "Buscar"
///
/// `on_search` получает уже обрезанный непустой код.
#[component]
pub fn SearchInput(
    #[prop(into)] loading: Signal<bool>,
    on_search: Callback<String>,
) -> impl IntoView {
    let code = RwSignal::new(String::new());

    let submit = move || {
        let value = code.get_untracked().trim().to_string();
        if !value.is_empty() && !loading.get_untracked() {
            on_search.run(value);
        }
    };

    let search_disabled = Signal::derive(move || code.get().trim().is_empty() || loading.get());

    view! {
        <form
            class="search-form"
            on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }
        >
            <Flex align=FlexAlign::Center>
                <span class="search-form__icon">{icon("search")}</span>
                <Input
                    value=code
                    placeholder="Digite o código do item..."
                    disabled=loading
                    attr:style="flex: 1;"
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=search_disabled
                    on_click=move |_| submit()
                >
                    {move || if loading.get() {
                        view! { <Spinner /> }.into_any()
                    } else {
                        view! { "Buscar" }.into_any()
                    }}
                </Button>
            </Flex>
        </form>
    }
}
