use rust_decimal::Decimal;
use sqlx::FromRow;

/// Favorite joined with the goods card and its owner's profile.
#[derive(Debug, FromRow)]
pub struct FavoriteItem {
    pub userid: i64,
    pub goods_id: i64,
    pub goods_image: Option<String>,
    pub goods_title: Option<String>,
    pub goods_price: Option<Decimal>,
    pub goods_status: Option<String>,
    pub user_image: Option<String>,
    pub user_name: Option<String>,
}
