use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Comment joined with the commenter's profile; every read path wants the
/// author attached, so the plain row shape is never fetched on its own.
#[derive(Debug, FromRow)]
pub struct CommentDetail {
    pub comment_id: i64,
    pub userid: i64,
    pub goods_id: i64,
    pub content: String,
    pub image: Option<String>,
    pub time: DateTime<Utc>,
    pub username: Option<String>,
    pub user_image: Option<String>,
}
