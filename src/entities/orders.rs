use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Order joined with buyer, goods, seller and shipping address.
#[derive(Debug, FromRow)]
pub struct OrderDetail {
    pub order_id: i64,
    pub userid: i64,
    pub goods_id: i64,
    pub address_id: i64,
    pub status: String,
    pub time: DateTime<Utc>,
    pub buyer_username: Option<String>,
    pub buyer_image: Option<String>,
    pub goods_title: Option<String>,
    pub goods_image: Option<String>,
    pub goods_price: Option<Decimal>,
    pub goods_classify: Option<String>,
    pub seller_id: Option<i64>,
    pub seller_username: Option<String>,
    pub seller_image: Option<String>,
    pub address_username: Option<String>,
    pub address_phone: Option<String>,
    pub address_area: Option<String>,
    pub address_detail: Option<String>,
}
