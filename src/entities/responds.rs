use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct RespondDetail {
    pub respond_id: i64,
    pub userid: i64,
    pub community_id: i64,
    pub respond_content: String,
    pub respond_image: Option<String>,
    pub time: DateTime<Utc>,
    pub username: Option<String>,
    pub user_image: Option<String>,
}
