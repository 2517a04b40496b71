use super::api;
use super::server_files::ServerFiles;
use contracts::shared::spreadsheet::{is_spreadsheet, ACCEPT_ATTR};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_upload_spreadsheet::{
    UploadSpreadsheet, UploadStatus, UploadedFile, PROGRESS_TICK_MS,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;

use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use crate::system::status_card::StatusCard;
use crate::usecases::u502_commit_spreadsheets::CommitAction;
use crate::usecases::u503_sync_database::SyncAction;

/// Проходит ли файл клиентский фильтр (пустой MIME браузер отдаёт для
/// неизвестных типов)
pub fn is_acceptable(name: &str, mime: &str) -> bool {
    let mime = mime.trim();
    is_spreadsheet(name, (!mime.is_empty()).then_some(mime))
}

fn update_entry(files: RwSignal<Vec<UploadedFile>>, id: Uuid, f: impl FnOnce(&mut UploadedFile)) {
    files.update(|list| {
        if let Some(entry) = list.iter_mut().find(|e| e.id == id) {
            f(entry);
        }
    });
}

fn status_color(status: UploadStatus) -> BadgeColor {
    match status {
        UploadStatus::Uploading => BadgeColor::Informative,
        UploadStatus::Success => BadgeColor::Success,
        UploadStatus::Error => BadgeColor::Danger,
    }
}

/// Страница "Upload": загрузка таблиц, commit и синхронизация
#[component]
pub fn UploadPage() -> impl IntoView {
    let notifications = use_notifications();
    let files = RwSignal::new(Vec::<UploadedFile>::new());
    let (is_drag_active, set_is_drag_active) = signal(false);
    // Увеличивается после каждой успешной загрузки, ServerFiles перечитывает список
    let files_version = RwSignal::new(0u32);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let handle_files = move |list: web_sys::FileList| {
        let accepted: Vec<web_sys::File> = (0..list.length())
            .filter_map(|i| list.get(i))
            .filter(|file| is_acceptable(&file.name(), &file.type_()))
            .collect();

        if accepted.is_empty() {
            notifications.error(
                "Tipo de arquivo inválido",
                Some("Por favor, selecione apenas arquivos Excel (.xlsx ou .xls)".to_string()),
            );
            return;
        }

        for file in accepted {
            let name = file.name();
            let entry = UploadedFile::new(name.clone(), file.size() as u64);
            let id = entry.id;
            files.update(|list| list.push(entry));

            // Косметический прогресс: тикает, пока файл в статусе uploading
            spawn_local(async move {
                loop {
                    gloo_timers::future::TimeoutFuture::new(PROGRESS_TICK_MS).await;
                    let uploading = files
                        .try_with_untracked(|list| {
                            list.iter().any(|e| e.id == id && e.is_uploading())
                        })
                        .unwrap_or(false);
                    if !uploading {
                        break;
                    }
                    update_entry(files, id, UploadedFile::tick);
                }
            });

            // Реальный запрос: его результат всегда окончательный
            spawn_local(async move {
                match api::upload_file(file).await {
                    Ok(response) => {
                        update_entry(files, id, UploadedFile::complete);
                        log::info!("Uploaded {} ({} bytes)", response.filename, response.size);
                        notifications.success(
                            "Arquivo enviado com sucesso!",
                            Some(format!("{} foi processado e adicionado ao sistema.", name)),
                        );
                        files_version.update(|v| *v += 1);
                    }
                    Err(e) => {
                        log::error!("Upload of {} failed: {}", name, e);
                        update_entry(files, id, |entry| entry.fail(e));
                        notifications.error(
                            "Erro no upload",
                            Some(format!("Não foi possível processar {}.", name)),
                        );
                    }
                }
            });
        }
    };

    let remove_file = move |id: Uuid| files.update(|list| list.retain(|e| e.id != id));

    view! {
        <PageFrame
            page_id="u501_upload_spreadsheet--usecase"
            category=PAGE_CAT_USECASE
            title=UploadSpreadsheet::display_name()
            subtitle="Envie planilhas de estoque, registre no git e atualize a base de dados."
        >
            <div class="upload-layout">
                <div class="upload-layout__main">
                    <div class="card">
                        <div class="card__header">
                            {icon("spreadsheet")}
                            <h2 class="section-title">"Upload de Planilhas"</h2>
                        </div>
                        <div class="card__body">
                            <p class="card__description">
                                "Arraste e solte arquivos Excel (.xlsx, .xls) ou clique para selecionar"
                            </p>
                            <input
                                node_ref=input_ref
                                type="file"
                                multiple=true
                                accept=ACCEPT_ATTR
                                style="display: none;"
                                on:change=move |ev| {
                                    let input: web_sys::HtmlInputElement = event_target(&ev);
                                    if let Some(list) = input.files() {
                                        handle_files(list);
                                    }
                                    // тот же файл можно выбрать повторно
                                    input.set_value("");
                                }
                            />
                            <div
                                class=move || if is_drag_active.get() { "dropzone dropzone--active" } else { "dropzone" }
                                on:click=move |_| {
                                    if let Some(input) = input_ref.get() {
                                        input.click();
                                    }
                                }
                                on:dragover=move |ev: leptos::ev::DragEvent| {
                                    ev.prevent_default();
                                    set_is_drag_active.set(true);
                                }
                                on:dragleave=move |_| set_is_drag_active.set(false)
                                on:drop=move |ev: leptos::ev::DragEvent| {
                                    ev.prevent_default();
                                    set_is_drag_active.set(false);
                                    if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
                                        handle_files(list);
                                    }
                                }
                            >
                                <span class="dropzone__icon">{icon("upload")}</span>
                                {move || if is_drag_active.get() {
                                    view! { <p class="dropzone__title">"Solte os arquivos aqui..."</p> }.into_any()
                                } else {
                                    view! {
                                        <div>
                                            <p class="dropzone__title">"Arraste arquivos Excel aqui ou clique para selecionar"</p>
                                            <p class="dropzone__hint">"Suporta arquivos .xlsx e .xls"</p>
                                        </div>
                                    }.into_any()
                                }}
                            </div>
                        </div>
                    </div>

                    <Show when=move || files.with(|list| !list.is_empty())>
                        <div class="card">
                            <div class="card__header">
                                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                                    <h2 class="section-title">"Arquivos Processados"</h2>
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        size=ButtonSize::Small
                                        on_click=move |_| files.set(Vec::new())
                                    >
                                        "Limpar Todos"
                                    </Button>
                                </Flex>
                            </div>
                            <div class="card__body">
                                {move || files.get().into_iter().map(|entry| {
                                    let id = entry.id;
                                    let uploading = entry.is_uploading();
                                    let progress = entry.progress;
                                    view! {
                                        <div class="upload-row">
                                            <span class="upload-row__icon">{icon("spreadsheet")}</span>
                                            <div class="upload-row__info">
                                                <span class="upload-row__name">{entry.original_name.clone()}</span>
                                                <span class="upload-row__size">{entry.size_display()}</span>
                                                {uploading.then(|| view! {
                                                    <div class="progress">
                                                        <div class="progress__bar" style=format!("width: {}%;", progress)></div>
                                                    </div>
                                                })}
                                                {entry.error.clone().map(|err| view! {
                                                    <span class="upload-row__error">{err}</span>
                                                })}
                                            </div>
                                            <Badge appearance=BadgeAppearance::Tint color=status_color(entry.status)>
                                                {entry.status.label()}
                                            </Badge>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| remove_file(id)
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    </Show>

                    <ServerFiles version=files_version />
                </div>

                <div class="upload-layout__side">
                    <div class="card">
                        <div class="card__header">
                            <h2 class="section-title">"Ações"</h2>
                        </div>
                        <div class="card__body">
                            <CommitAction />
                            <SyncAction />
                        </div>
                    </div>
                    <StatusCard />
                </div>
            </div>
        </PageFrame>
    }
}
