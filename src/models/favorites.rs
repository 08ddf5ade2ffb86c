use crate::entities::favorites::FavoriteItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct FavoriteArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub goods_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct FavoriteListArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
}

#[derive(Serialize)]
pub struct FavoriteInfo {
    pub userid: i64,
    pub goods_id: i64,
    #[serde(rename = "goodsImage")]
    pub goods_image: Option<String>,
    #[serde(rename = "goodsTitle")]
    pub goods_title: Option<String>,
    #[serde(rename = "goodsPrice")]
    pub goods_price: Option<Decimal>,
    #[serde(rename = "goodsStatus")]
    pub goods_status: Option<String>,
    #[serde(rename = "userImage")]
    pub user_image: Option<String>,
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
}

impl From<FavoriteItem> for FavoriteInfo {
    fn from(item: FavoriteItem) -> Self {
        Self {
            userid: item.userid,
            goods_id: item.goods_id,
            goods_image: item.goods_image,
            goods_title: item.goods_title,
            goods_price: item.goods_price,
            goods_status: item.goods_status,
            user_image: item.user_image,
            user_name: item.user_name,
        }
    }
}

#[derive(Serialize)]
pub struct FavoriteCheck {
    #[serde(rename = "isFavorited")]
    pub is_favorited: bool,
}
