use crate::entities::replies::ReplyDetail;
use crate::models::envelope::EnvelopeBase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ListRepliesArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub comment_id: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
}

#[derive(Deserialize)]
pub struct AddReplyArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub comment_id: Option<i64>,
    pub reply_content: Option<String>,
    pub reply_image: Option<String>,
}

#[derive(Serialize)]
pub struct ReplyInfo {
    pub reply_id: i64,
    pub userid: i64,
    pub comment_id: i64,
    pub reply_content: String,
    pub reply_image: Option<String>,
    pub reply_time: DateTime<Utc>,
    pub username: Option<String>,
    pub user_image: Option<String>,
}

impl From<ReplyDetail> for ReplyInfo {
    fn from(reply: ReplyDetail) -> Self {
        Self {
            reply_id: reply.reply_id,
            userid: reply.userid,
            comment_id: reply.comment_id,
            reply_content: reply.reply_content,
            reply_image: reply.reply_image,
            reply_time: reply.reply_time,
            username: reply.username,
            user_image: reply.user_image,
        }
    }
}

#[derive(Serialize)]
pub struct CreatedReply {
    pub reply_id: i64,
    pub userid: i64,
    pub comment_id: i64,
    pub reply_content: String,
    pub reply_image: Option<String>,
    pub reply_time: DateTime<Utc>,
}

/// The reply image upload endpoint historically returned the path as a
/// sibling of the envelope rather than inside `result`.
#[derive(Serialize)]
pub struct ReplyImageResponse {
    #[serde(flatten)]
    pub base: EnvelopeBase,
    #[serde(rename = "imagePath")]
    pub image_path: String,
}
