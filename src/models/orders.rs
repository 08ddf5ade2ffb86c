use crate::entities::orders::OrderDetail;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ListOrdersArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
}

#[derive(Deserialize)]
pub struct AddOrderArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub goods_id: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub address_id: Option<i64>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateOrderArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub order_id: Option<i64>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteOrderArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub order_id: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
}

#[derive(Serialize)]
pub struct OrderInfo {
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

impl From<OrderDetail> for OrderInfo {
    fn from(order: OrderDetail) -> Self {
        Self {
            order_id: order.order_id,
            userid: order.userid,
            goods_id: order.goods_id,
            address_id: order.address_id,
            status: order.status,
            time: order.time,
            buyer_username: order.buyer_username,
            buyer_image: order.buyer_image,
            goods_title: order.goods_title,
            goods_image: order.goods_image,
            goods_price: order.goods_price,
            goods_classify: order.goods_classify,
            seller_id: order.seller_id,
            seller_username: order.seller_username,
            seller_image: order.seller_image,
            address_username: order.address_username,
            address_phone: order.address_phone,
            address_area: order.address_area,
            address_detail: order.address_detail,
        }
    }
}

#[derive(Serialize)]
pub struct CreatedOrder {
    pub order_id: i64,
    pub userid: i64,
    pub goods_id: i64,
    pub address_id: i64,
    pub status: String,
    /// False when the follow-up goods status flip failed; the order itself
    /// still stands.
    pub goods_status_updated: bool,
}

#[derive(Serialize)]
pub struct UpdatedOrder {
    pub order_id: i64,
    pub status: String,
}

#[derive(Serialize)]
pub struct DeletedOrder {
    pub order_id: i64,
}
