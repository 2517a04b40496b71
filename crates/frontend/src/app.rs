use crate::domain::a001_stock_item::ui::LookupPage;
use crate::domain::a001_stock_item::LookupSource;
use crate::layout::TopHeader;
use crate::shared::notifications::{NotificationHost, NotificationStore};
use crate::usecases::u501_upload_spreadsheet::UploadPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Источник товаров для страницы поиска; LookupSource::Remote
    // переключает её на GET /api/a001/stock-item/:code
    provide_context(LookupSource::default());

    provide_context(NotificationStore::new());

    view! {
        <ConfigProvider>
            <Router>
                <TopHeader />
                <main class="app__content">
                    <Routes fallback=|| view! { <p class="page__subtitle">"Página não encontrada"</p> }>
                        <Route path=path!("/") view=LookupPage />
                        <Route path=path!("/upload") view=UploadPage />
                    </Routes>
                </main>
                <NotificationHost />
            </Router>
        </ConfigProvider>
    }
}
