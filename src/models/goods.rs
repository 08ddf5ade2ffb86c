use crate::entities::goods::{Goods, GoodsDetail};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct UserGoodsArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
}

#[derive(Deserialize)]
pub struct UploadGoodsArgs {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::models::flex::opt_decimal")]
    pub price: Option<Decimal>,
    pub content: Option<String>,
    pub classify: Option<String>,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
}

#[derive(Deserialize)]
pub struct UpdateGoodsArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub goods_id: Option<i64>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::models::flex::opt_decimal")]
    pub price: Option<Decimal>,
    pub content: Option<String>,
    pub classify: Option<String>,
    pub address: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateStatusArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub goods_id: Option<i64>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct GoodsDetailArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub goods_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct SearchArgs {
    pub title: Option<String>,
}

#[derive(Serialize)]
pub struct GoodsInfo {
    pub goods_id: i64,
    pub userid: i64,
    pub address: Option<String>,
    pub classify: Option<String>,
    pub title: String,
    pub content: Option<String>,
    pub price: Decimal,
    pub image: Option<String>,
    pub imageone: Option<String>,
    pub label: Option<String>,
    pub likes: i64,
    pub views: i64,
    pub status: String,
    pub time: DateTime<Utc>,
}

impl From<Goods> for GoodsInfo {
    fn from(goods: Goods) -> Self {
        Self {
            goods_id: goods.goods_id,
            userid: goods.userid,
            address: goods.address,
            classify: goods.classify,
            title: goods.title,
            content: goods.content,
            price: goods.price,
            image: goods.image,
            imageone: goods.imageone,
            label: goods.label,
            likes: goods.likes,
            views: goods.views,
            status: goods.status,
            time: goods.time,
        }
    }
}

#[derive(Serialize)]
pub struct GoodsDetailInfo {
    #[serde(flatten)]
    pub goods: GoodsInfo,
    pub username: Option<String>,
    pub user_image: Option<String>,
}

impl From<GoodsDetail> for GoodsDetailInfo {
    fn from(detail: GoodsDetail) -> Self {
        Self {
            goods: detail.goods.into(),
            username: detail.username,
            user_image: detail.user_image,
        }
    }
}

#[derive(Serialize)]
pub struct SellerProfile {
    pub userid: i64,
    pub username: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize)]
pub struct SellerStatistics {
    #[serde(rename = "totalGoods")]
    pub total_goods: usize,
    #[serde(rename = "onSaleGoods")]
    pub on_sale_goods: usize,
    #[serde(rename = "soldGoods")]
    pub sold_goods: usize,
    #[serde(rename = "totalLikes")]
    pub total_likes: i64,
    #[serde(rename = "totalViews")]
    pub total_views: i64,
}

#[derive(Serialize)]
pub struct SellerInfoResult {
    #[serde(rename = "userInfo")]
    pub user_info: SellerProfile,
    pub statistics: SellerStatistics,
    #[serde(rename = "goodsList")]
    pub goods_list: Vec<GoodsInfo>,
}

#[derive(Serialize)]
pub struct SyncCountsResult {
    pub likes_updated: u64,
    pub views_updated: u64,
}

#[derive(Serialize)]
pub struct UpdatedStatus {
    pub goods_id: i64,
    pub status: String,
    pub affected_rows: u64,
}

#[derive(Serialize)]
pub struct UploadedGoods {
    pub goods_id: i64,
}
