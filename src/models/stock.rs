use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Stock — Point-in-time inventory snapshot from the `stocks` endpoint
// ---------------------------------------------------------------------------

/// Current inventory for one article at one warehouse: quantities on hand
/// and in transit, listing price and discount, days on site.
///
/// Unlike the event endpoints this one is a snapshot, and it is the endpoint
/// covered by the date-filter retry workaround.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stock {
    pub last_change_date: String,
    pub supplier_article: String,
    pub tech_size: String,
    pub barcode: String,
    pub quantity: i64,
    pub is_supply: bool,
    pub is_realization: bool,
    pub quantity_full: i64,
    pub warehouse_name: String,
    pub in_way_to_client: i64,
    pub in_way_from_client: i64,
    pub nm_id: i64,
    pub subject: String,
    pub category: String,
    pub days_on_site: i64,
    pub brand: String,
    #[serde(rename = "SCCode")]
    pub sc_code: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Discount")]
    pub discount: f64,
}
