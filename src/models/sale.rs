use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Sale — Completed sale event from the `sales` endpoint
// ---------------------------------------------------------------------------

/// A completed (or storno-reversed) sale with the full pricing breakdown:
/// list price, discount, promo code, seller payout (`for_pay`) and the final
/// customer price.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sale {
    pub date: String,
    pub last_change_date: String,
    pub supplier_article: String,
    pub tech_size: String,
    pub barcode: String,
    pub total_price: f64,
    pub discount_percent: f64,
    pub is_supply: bool,
    pub is_realization: bool,
    pub promo_code_discount: f64,
    pub warehouse_name: String,
    pub country_name: String,
    pub oblast_okrug_name: String,
    pub region_name: String,
    #[serde(rename = "incomeID")]
    pub income_id: i64,
    #[serde(rename = "saleID")]
    pub sale_id: String,
    pub odid: i64,
    pub spp: f64,
    pub for_pay: f64,
    pub finished_price: f64,
    pub price_with_disc: f64,
    pub nm_id: i64,
    pub subject: String,
    pub category: String,
    pub brand: String,
    pub is_storno: i64,
    pub g_number: String,
    pub sticker: String,
}
