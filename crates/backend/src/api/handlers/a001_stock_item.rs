use axum::extract::{Path, State};
use axum::Json;
use contracts::domain::a001_stock_item::Item;

use crate::app_state::AppState;
use crate::domain::a001_stock_item::service;
use crate::shared::error::AppError;

/// GET /api/a001/stock-item/:code
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Item>, AppError> {
    service::get_by_code(state.catalog.as_ref(), &code).map(Json)
}
