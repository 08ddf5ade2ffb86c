use crate::entities::users::User;
use crate::models::envelope::EnvelopeBase;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LoginArgs {
    pub account: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct RegisterArgs {
    pub username: Option<String>,
    pub account: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub sex: Option<String>,
    pub identity: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateUserInfoArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
    pub account: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
    pub sex: Option<String>,
    pub phone: Option<String>,
    pub identity: Option<String>,
}

#[derive(Deserialize)]
pub struct SendCodeArgs {
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginByCodeArgs {
    pub phone: Option<String>,
    pub code: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdatePasswordArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
    #[serde(rename = "oldPassword")]
    pub old_password: Option<String>,
    #[serde(rename = "newPassword")]
    pub new_password: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdatePhoneArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
    #[serde(rename = "newPhone")]
    pub new_phone: Option<String>,
}

/// Public projection of a user row. Password hashes never leave the service.
#[derive(Serialize)]
pub struct UserInfo {
    pub userid: i64,
    pub username: Option<String>,
    pub account: Option<String>,
    pub phone: Option<String>,
    pub sex: Option<String>,
    pub identity: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "isNewUser", skip_serializing_if = "std::ops::Not::not")]
    pub is_new_user: bool,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            userid: user.userid,
            username: user.username,
            account: user.account,
            phone: user.phone,
            sex: user.sex,
            identity: user.identity,
            image: user.image,
            is_new_user: false,
        }
    }
}

#[derive(Serialize)]
pub struct SendCodeResponse {
    #[serde(flatten)]
    pub base: EnvelopeBase,
    /// Echoed for development builds; there is no SMS gateway attached.
    #[serde(rename = "devCode")]
    pub dev_code: String,
}
