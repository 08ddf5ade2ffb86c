use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Address {
    pub address_id: i64,
    pub userid: i64,
    pub username: String,
    pub phone: String,
    pub area: String,
    pub area_one: String,
}
