use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct User {
    pub userid: i64,
    pub username: Option<String>,
    pub account: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub sex: Option<String>,
    pub identity: Option<String>,
    pub image: Option<String>,
}
