use crate::common::context::Context;
use crate::entities::favorites::FavoriteItem;

const TABLE_NAME: &str = "favorites";

pub async fn fetch_items_by_user<C: Context>(
    ctx: &C,
    userid: i64,
) -> sqlx::Result<Vec<FavoriteItem>> {
    const QUERY: &str = "SELECT \
         f.userid, f.goods_id, \
         g.image AS goods_image, g.title AS goods_title, \
         g.price AS goods_price, g.status AS goods_status, \
         u.image AS user_image, u.username AS user_name \
         FROM favorites f \
         LEFT JOIN goods g ON f.goods_id = g.goods_id \
         LEFT JOIN user u ON g.userid = u.userid \
         WHERE f.userid = ? \
         ORDER BY f.goods_id DESC";
    sqlx::query_as(QUERY).bind(userid).fetch_all(ctx.db()).await
}

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
