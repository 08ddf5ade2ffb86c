use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Banner {
    pub banner_id: i64,
    pub banner_image: String,
    pub title: Option<String>,
}
