//! Spreadsheet download endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};

use crate::error::InventoryError;
use crate::export::{EXPORT_FILENAME, XLSX_CONTENT_TYPE};
use crate::state::AppState;
use crate::usecase::export::ExportCatalogUseCase;

/// Handler for `GET|POST /download-to-excel/` — the full catalog as an
/// `.xlsx` attachment.
pub async fn download_to_excel(State(state): State<AppState>) -> Result<Response, InventoryError> {
    let usecase = ExportCatalogUseCase {
        repo: state.item_repo(),
    };
    let buffer = usecase.execute().await?;
    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename={EXPORT_FILENAME}"),
            ),
        ],
        buffer,
    )
        .into_response())
}
