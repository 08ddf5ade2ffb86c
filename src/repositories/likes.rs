use crate::common::context::Context;
use crate::entities::likes::{Like, LikeWithGoods};

const TABLE_NAME: &str = "likes";
const READ_FIELDS: &str = "likes_id, userid, goods_id";

pub async fn exists<C: Context>(ctx: &C, userid: i64, goods_id: i64) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) FROM ",
        TABLE_NAME,
        " WHERE userid = ? AND goods_id = ?"
    );
    let count: i64 = sqlx::query_scalar(QUERY)
        .bind(userid)
        .bind(goods_id)
        .fetch_one(ctx.db())
        .await?;
    Ok(count > 0)
}

pub async fn create<C: Context>(ctx: &C, userid: i64, goods_id: i64) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (userid, goods_id) VALUES (?, ?)"
    );
    sqlx::query(QUERY)
        .bind(userid)
        .bind(goods_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}

pub async fn delete<C: Context>(ctx: &C, userid: i64, goods_id: i64) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "DELETE FROM ",
        TABLE_NAME,
        " WHERE userid = ? AND goods_id = ?"
    );
    let result = sqlx::query(QUERY)
        .bind(userid)
        .bind(goods_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}

pub async fn fetch_by_goods<C: Context>(ctx: &C, goods_id: i64) -> sqlx::Result<Vec<Like>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE goods_id = ? ORDER BY likes_id DESC"
    );
    sqlx::query_as(QUERY)
        .bind(goods_id)
        .fetch_all(ctx.db())
        .await
}

pub async fn fetch_by_user_with_goods<C: Context>(
    ctx: &C,
    userid: i64,
) -> sqlx::Result<Vec<LikeWithGoods>> {
    const QUERY: &str = "SELECT l.likes_id, l.userid, l.goods_id, \
         g.title, g.price, g.image, g.status \
         FROM likes l \
         LEFT JOIN goods g ON l.goods_id = g.goods_id \
         WHERE l.userid = ? \
         ORDER BY l.likes_id DESC";
    sqlx::query_as(QUERY).bind(userid).fetch_all(ctx.db()).await
}

pub async fn count_for_goods<C: Context>(ctx: &C, goods_id: i64) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) FROM ",
        TABLE_NAME,
        " WHERE goods_id = ?"
    );
    sqlx::query_scalar(QUERY)
        .bind(goods_id)
        .fetch_one(ctx.db())
        .await
}
