use crate::entities::responds::RespondDetail;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ListRespondsArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub community_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct AddRespondArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub community_id: Option<i64>,
    pub respond_content: Option<String>,
    pub respond_image: Option<String>,
}

#[derive(Serialize)]
pub struct RespondInfo {
    pub respond_id: i64,
    pub userid: i64,
    pub community_id: i64,
    pub respond_content: String,
    pub respond_image: Option<String>,
    pub time: DateTime<Utc>,
    pub username: Option<String>,
    pub user_image: Option<String>,
}

impl From<RespondDetail> for RespondInfo {
    fn from(respond: RespondDetail) -> Self {
        Self {
            respond_id: respond.respond_id,
            userid: respond.userid,
            community_id: respond.community_id,
            respond_content: respond.respond_content,
            respond_image: respond.respond_image,
            time: respond.time,
            username: respond.username,
            user_image: respond.user_image,
        }
    }
}

#[derive(Serialize)]
pub struct CreatedRespond {
    pub respond_id: i64,
    pub userid: i64,
    pub community_id: i64,
    pub respond_content: String,
    pub respond_image: Option<String>,
}
