use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Order — Order event from the `orders` endpoint
// ---------------------------------------------------------------------------

/// A customer order, possibly cancelled.
///
/// Field renames follow the wire format exactly: the API mixes camelCase with
/// `incomeID` and snake_case `cancel_dt`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub date: String,
    pub last_change_date: String,
    pub supplier_article: String,
    pub tech_size: String,
    pub barcode: String,
    pub total_price: f64,
    pub discount_percent: f64,
    pub warehouse_name: String,
    pub oblast: String,
    #[serde(rename = "incomeID")]
    pub income_id: i64,
    pub odid: i64,
    pub nm_id: i64,
    pub subject: String,
    pub category: String,
    pub brand: String,
    pub is_cancel: bool,
    #[serde(rename = "cancel_dt")]
    pub cancel_dt: String,
    pub g_number: String,
    pub sticker: String,
}
