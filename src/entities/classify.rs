use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Classify {
    pub classify_id: i64,
    pub name: String,
}
