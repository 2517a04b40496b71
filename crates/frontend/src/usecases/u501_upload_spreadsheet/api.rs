use contracts::shared::files::FileListResponse;
use contracts::usecases::u501_upload_spreadsheet::{UploadResponse, UPLOAD_FIELD};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_text, read_json};

/// POST /api/upload (multipart, поле `file`)
pub async fn upload_file(file: web_sys::File) -> Result<UploadResponse, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, &file, &file.name())
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let request = web_sys::Request::new_with_str_and_init(&api_url("/api/upload"), &opts)
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
            .await
            .map_err(|e| format!("{e:?}"))?;
        return Err(error_text(resp.status(), &text.as_string().unwrap_or_default()));
    }

    let json = wasm_bindgen_futures::JsFuture::from(
        resp.json().map_err(|e| format!("Failed to parse JSON: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("Failed to get JSON: {:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// GET /api/files
pub async fn list_files() -> Result<FileListResponse, String> {
    let response = Request::get(&api_url("/api/files"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}
