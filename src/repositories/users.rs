use crate::common::context::Context;
use crate::entities::users::User;
use sqlx::QueryBuilder;

const TABLE_NAME: &str = "user";
const READ_FIELDS: &str = "userid, username, account, password, phone, sex, identity, image";

pub struct NewUser<'a> {
    pub username: Option<&'a str>,
    pub account: Option<&'a str>,
    pub password_hash: Option<String>,
    pub phone: Option<&'a str>,
    pub sex: Option<&'a str>,
    pub identity: Option<&'a str>,
    pub image: Option<&'a str>,
}

#[derive(Default)]
pub struct UserChanges {
    pub account: Option<String>,
    pub password_hash: Option<String>,
    pub username: Option<String>,
    pub sex: Option<String>,
    pub phone: Option<String>,
    pub identity: Option<String>,
    pub image: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.account.is_none()
            && self.password_hash.is_none()
            && self.username.is_none()
            && self.sex.is_none()
            && self.phone.is_none()
            && self.identity.is_none()
            && self.image.is_none()
    }
}

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<User>> {
    const QUERY: &str = const_str::concat!("SELECT ", READ_FIELDS, " FROM ", TABLE_NAME);
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub async fn fetch_one<C: Context>(ctx: &C, userid: i64) -> sqlx::Result<Option<User>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE userid = ?"
    );
    sqlx::query_as(QUERY)
        .bind(userid)
        .fetch_optional(ctx.db())
        .await
}

pub async fn fetch_one_by_account<C: Context>(
    ctx: &C,
    account: &str,
) -> sqlx::Result<Option<User>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE account = ?"
    );
    sqlx::query_as(QUERY)
        .bind(account)
        .fetch_optional(ctx.db())
        .await
}

pub async fn fetch_one_by_phone<C: Context>(ctx: &C, phone: &str) -> sqlx::Result<Option<User>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE phone = ?"
    );
    sqlx::query_as(QUERY)
        .bind(phone)
        .fetch_optional(ctx.db())
        .await
}

pub async fn create<C: Context>(ctx: &C, user: NewUser<'_>) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (username, account, password, phone, sex, identity, image) ",
        "VALUES (?, ?, ?, ?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(user.username)
        .bind(user.account)
        .bind(user.password_hash)
        .bind(user.phone)
        .bind(user.sex)
        .bind(user.identity)
        .bind(user.image)
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}

/// Minimal row for phone-code signups, matching `user_<phone>` accounts.
pub async fn create_by_phone<C: Context>(ctx: &C, phone: &str, account: &str) -> sqlx::Result<u64> {
    const QUERY: &str =
        const_str::concat!("INSERT INTO ", TABLE_NAME, " (phone, account) VALUES (?, ?)");
    let result = sqlx::query(QUERY)
        .bind(phone)
        .bind(account)
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}

pub async fn update<C: Context>(ctx: &C, userid: i64, changes: UserChanges) -> sqlx::Result<u64> {
    let mut builder = QueryBuilder::new(const_str::concat!("UPDATE ", TABLE_NAME, " SET "));
    let mut fields = builder.separated(", ");
    if let Some(account) = changes.account {
        fields.push("account = ").push_bind_unseparated(account);
    }
    if let Some(password_hash) = changes.password_hash {
        fields
            .push("password = ")
            .push_bind_unseparated(password_hash);
    }
    if let Some(username) = changes.username {
        fields.push("username = ").push_bind_unseparated(username);
    }
    if let Some(sex) = changes.sex {
        fields.push("sex = ").push_bind_unseparated(sex);
    }
    if let Some(phone) = changes.phone {
        fields.push("phone = ").push_bind_unseparated(phone);
    }
    if let Some(identity) = changes.identity {
        fields.push("identity = ").push_bind_unseparated(identity);
    }
    if let Some(image) = changes.image {
        fields.push("image = ").push_bind_unseparated(image);
    }
    builder.push(" WHERE userid = ").push_bind(userid);

    let result = builder.build().execute(ctx.db()).await?;
    Ok(result.rows_affected())
}

pub async fn update_password<C: Context>(
    ctx: &C,
    userid: i64,
    password_hash: &str,
) -> sqlx::Result<u64> {
    const QUERY: &str =
        const_str::concat!("UPDATE ", TABLE_NAME, " SET password = ? WHERE userid = ?");
    let result = sqlx::query(QUERY)
        .bind(password_hash)
        .bind(userid)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}

pub async fn update_phone<C: Context>(ctx: &C, userid: i64, phone: &str) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!("UPDATE ", TABLE_NAME, " SET phone = ? WHERE userid = ?");
    let result = sqlx::query(QUERY)
        .bind(phone)
        .bind(userid)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}
