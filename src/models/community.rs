use crate::entities::community::CommunityPost;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ListPostsArgs {
    pub classify: Option<String>,
}

#[derive(Deserialize)]
pub struct AddPostArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
    pub content: Option<String>,
    pub classify: Option<String>,
    pub community_image: Option<String>,
}

#[derive(Serialize)]
pub struct CommunityPostInfo {
    pub community_id: i64,
    pub userid: i64,
    pub content: String,
    pub classify: String,
    pub community_image: Option<String>,
    pub time: DateTime<Utc>,
    pub username: Option<String>,
    pub image: Option<String>,
}

impl From<CommunityPost> for CommunityPostInfo {
    fn from(post: CommunityPost) -> Self {
        Self {
            community_id: post.community_id,
            userid: post.userid,
            content: post.content,
            classify: post.classify,
            community_image: post.community_image,
            time: post.time,
            username: post.username,
            image: post.image,
        }
    }
}

#[derive(Serialize)]
pub struct CreatedPost {
    pub community_id: i64,
    pub userid: i64,
    pub content: String,
    pub classify: String,
    pub community_image: Option<String>,
}
