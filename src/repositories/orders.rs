use crate::common::context::Context;
use crate::entities::orders::OrderDetail;

const TABLE_NAME: &str = "orders";

const DETAIL_QUERY: &str = "SELECT \
     o.order_id, o.userid, o.goods_id, o.address_id, o.status, o.time, \
     u.username AS buyer_username, u.image AS buyer_image, \
     g.title AS goods_title, g.image AS goods_image, g.price AS goods_price, \
     g.classify AS goods_classify, g.userid AS seller_id, \
     seller.username AS seller_username, seller.image AS seller_image, \
     a.username AS address_username, a.phone AS address_phone, \
     a.area AS address_area, a.area_one AS address_detail \
     FROM orders o \
     LEFT JOIN user u ON o.userid = u.userid \
     LEFT JOIN goods g ON o.goods_id = g.goods_id \
     LEFT JOIN user seller ON g.userid = seller.userid \
     LEFT JOIN address a ON o.address_id = a.address_id";

pub async fn fetch_detailed<C: Context>(
    ctx: &C,
    userid: Option<i64>,
) -> sqlx::Result<Vec<OrderDetail>> {
    match userid {
        Some(userid) => {
            const QUERY: &str = const_str::concat!(
                DETAIL_QUERY,
                " WHERE o.userid = ? ORDER BY o.time DESC"
            );
            sqlx::query_as(QUERY).bind(userid).fetch_all(ctx.db()).await
        }
        None => {
            const QUERY: &str = const_str::concat!(DETAIL_QUERY, " ORDER BY o.time DESC");
            sqlx::query_as(QUERY).fetch_all(ctx.db()).await
        }
    }
}

pub async fn create<C: Context>(
    ctx: &C,
    userid: i64,
    goods_id: i64,
    address_id: i64,
    status: &str,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (userid, goods_id, address_id, status, time) VALUES (?, ?, ?, ?, NOW())"
    );
    let result = sqlx::query(QUERY)
        .bind(userid)
        .bind(goods_id)
        .bind(address_id)
        .bind(status)
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}

pub async fn update_status<C: Context>(ctx: &C, order_id: i64, status: &str) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET status = ? WHERE order_id = ?"
    );
    let result = sqlx::query(QUERY)
        .bind(status)
        .bind(order_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}

/// Owner-scoped delete; zero affected rows means missing or not theirs.
pub async fn delete<C: Context>(ctx: &C, order_id: i64, userid: i64) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "DELETE FROM ",
        TABLE_NAME,
        " WHERE order_id = ? AND userid = ?"
    );
    let result = sqlx::query(QUERY)
        .bind(order_id)
        .bind(userid)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}
