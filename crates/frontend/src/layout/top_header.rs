//! TopHeader - верхняя панель навигации.
//!
//! Активная ссылка получает `aria-current="page"` от `leptos_router`.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// (путь, надпись, иконка)
pub const NAV_ITEMS: [(&str, &str, &str); 2] = [
    ("/", "Consulta", "search"),
    ("/upload", "Upload", "upload"),
];

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <nav class="top-header">
            <div class="top-header__brand">
                {icon("package")}
                <span class="top-header__title">"Controle de Estoque"</span>
            </div>
            <div class="top-header__links">
                {NAV_ITEMS
                    .iter()
                    .map(|(href, label, icon_name)| view! {
                        <A href=*href exact=true attr:class="top-header__link">
                            {icon(icon_name)}
                            <span>{*label}</span>
                        </A>
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
