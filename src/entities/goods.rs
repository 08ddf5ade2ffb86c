use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Goods {
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

/// Goods row joined with the seller's profile.
#[derive(Debug, FromRow)]
pub struct GoodsDetail {
    #[sqlx(flatten)]
    pub goods: Goods,
    pub username: Option<String>,
    pub user_image: Option<String>,
}
