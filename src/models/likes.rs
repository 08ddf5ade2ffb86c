use crate::entities::likes::{Like, LikeWithGoods};
use crate::models::envelope::EnvelopeBase;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LikeArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub goods_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct GoodsLikesArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub goods_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct UserLikesArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
}

#[derive(Serialize)]
pub struct LikeInfo {
    pub likes_id: i64,
    pub userid: i64,
    pub goods_id: i64,
}

impl From<Like> for LikeInfo {
    fn from(like: Like) -> Self {
        Self {
            likes_id: like.likes_id,
            userid: like.userid,
            goods_id: like.goods_id,
        }
    }
}

#[derive(Serialize)]
pub struct LikeWithGoodsInfo {
    #[serde(flatten)]
    pub like: LikeInfo,
    pub title: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub status: Option<String>,
}

impl From<LikeWithGoods> for LikeWithGoodsInfo {
    fn from(item: LikeWithGoods) -> Self {
        Self {
            like: item.like.into(),
            title: item.title,
            price: item.price,
            image: item.image,
            status: item.status,
        }
    }
}

#[derive(Serialize)]
pub struct LikeCheck {
    #[serde(rename = "isLiked")]
    pub is_liked: bool,
}

#[derive(Serialize)]
pub struct LikeCount {
    pub goods_id: i64,
    pub like_count: i64,
}

/// List responses attach `count` next to `result`.
#[derive(Serialize)]
pub struct LikeListResponse<T> {
    #[serde(flatten)]
    pub base: EnvelopeBase,
    pub result: Vec<T>,
    pub count: usize,
}
