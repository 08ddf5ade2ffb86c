use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct ReplyDetail {
    pub reply_id: i64,
    pub userid: i64,
    pub comment_id: i64,
    pub reply_content: String,
    pub reply_image: Option<String>,
    pub reply_time: DateTime<Utc>,
    pub username: Option<String>,
    pub user_image: Option<String>,
}
