use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Like {
    pub likes_id: i64,
    pub userid: i64,
    pub goods_id: i64,
}

/// Like joined with the goods card, for a user's like history.
#[derive(Debug, FromRow)]
pub struct LikeWithGoods {
    #[sqlx(flatten)]
    pub like: Like,
    pub title: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub status: Option<String>,
}
