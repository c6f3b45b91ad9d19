use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Income — Shipment-received event from the `incomes` endpoint
// ---------------------------------------------------------------------------

/// A supply shipment received at a warehouse.
///
/// Dates arrive as strings and are passed through untouched; the fetch layer
/// does not validate the payload. `nm_id` is the product identifier shared
/// across all four record kinds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Income {
    pub date: String,
    pub last_change_date: String,
    pub supplier_article: String,
    pub tech_size: String,
    pub barcode: String,
    pub quantity: i64,
    pub total_price: f64,
    pub date_close: String,
    pub warehouse_name: String,
    pub nm_id: i64,
    pub status: String,
}
