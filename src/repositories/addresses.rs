use crate::common::context::Context;
use crate::entities::addresses::Address;

const TABLE_NAME: &str = "address";
const READ_FIELDS: &str = "address_id, userid, username, phone, area, area_one";

pub async fn fetch_by_user<C: Context>(ctx: &C, userid: i64) -> sqlx::Result<Vec<Address>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE userid = ?"
    );
    sqlx::query_as(QUERY).bind(userid).fetch_all(ctx.db()).await
}

pub async fn create<C: Context>(
    ctx: &C,
    userid: i64,
    username: &str,
    phone: &str,
    area: &str,
    area_one: &str,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (userid, username, phone, area, area_one) VALUES (?, ?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(userid)
        .bind(username)
        .bind(phone)
        .bind(area)
        .bind(area_one)
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}

pub async fn update<C: Context>(
    ctx: &C,
    address_id: i64,
    username: &str,
    phone: &str,
    area: &str,
    area_one: &str,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET username = ?, phone = ?, area = ?, area_one = ? WHERE address_id = ?"
    );
    let result = sqlx::query(QUERY)
        .bind(username)
        .bind(phone)
        .bind(area)
        .bind(area_one)
        .bind(address_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete<C: Context>(ctx: &C, address_id: i64) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE address_id = ?");
    let result = sqlx::query(QUERY)
        .bind(address_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}
