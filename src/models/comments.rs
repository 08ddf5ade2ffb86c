use crate::entities::comments::CommentDetail;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ListCommentsArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub goods_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct AddCommentArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub goods_id: Option<i64>,
    pub content: Option<String>,
}

#[derive(Serialize)]
pub struct CommentInfo {
    pub comment_id: i64,
    pub userid: i64,
    pub goods_id: i64,
    pub content: String,
    pub image: Option<String>,
    pub time: DateTime<Utc>,
    pub username: Option<String>,
    pub user_image: Option<String>,
}

impl From<CommentDetail> for CommentInfo {
    fn from(comment: CommentDetail) -> Self {
        Self {
            comment_id: comment.comment_id,
            userid: comment.userid,
            goods_id: comment.goods_id,
            content: comment.content,
            image: comment.image,
            time: comment.time,
            username: comment.username,
            user_image: comment.user_image,
        }
    }
}
