use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct CommunityPost {
    pub community_id: i64,
    pub userid: i64,
    pub content: String,
    pub classify: String,
    pub community_image: Option<String>,
    pub time: DateTime<Utc>,
    pub username: Option<String>,
    pub image: Option<String>,
}
