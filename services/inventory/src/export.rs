//! Spreadsheet serialization of the item catalog.

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::Workbook;

use stockroom_domain::item::Item;

use crate::error::InventoryError;

/// Attachment filename declared on the export response.
pub const EXPORT_FILENAME: &str = "inventory_list.xlsx";

/// Standard spreadsheet MIME type.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Header row labels, in column order.
pub const COLUMNS: [&str; 4] = ["Name", "Category", "Cost", "Amount"];

/// Serialize the catalog into an in-memory `.xlsx` document: one header row,
/// then one row per item in the given order. Unset costs stay blank cells.
pub fn write_catalog(items: &[Item]) -> Result<Vec<u8>, InventoryError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, label) in COLUMNS.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *label)
            .map_err(to_internal)?;
    }

    for (index, item) in items.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_string(row, 0, &item.name).map_err(to_internal)?;
        sheet
            .write_string(row, 1, item.category.as_str())
            .map_err(to_internal)?;
        if let Some(cost) = item.cost {
            let cost = cost
                .to_f64()
                .ok_or_else(|| anyhow::anyhow!("cost out of f64 range"))?;
            sheet.write_number(row, 2, cost).map_err(to_internal)?;
        }
        sheet
            .write_number(row, 3, f64::from(item.amount))
            .map_err(to_internal)?;
    }

    workbook.save_to_buffer().map_err(to_internal)
}

fn to_internal(e: rust_xlsxwriter::XlsxError) -> InventoryError {
    InventoryError::Internal(anyhow::anyhow!(e))
}
