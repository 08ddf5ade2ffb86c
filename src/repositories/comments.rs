use crate::common::context::Context;
use crate::entities::comments::CommentDetail;
use sqlx::QueryBuilder;

const TABLE_NAME: &str = "comments";

const DETAIL_FIELDS: &str = "c.comment_id, c.userid, c.goods_id, c.content, c.image, c.time, \
     u.username, u.image AS user_image";

pub async fn fetch_filtered<C: Context>(
    ctx: &C,
    userid: Option<i64>,
    goods_id: Option<i64>,
) -> sqlx::Result<Vec<CommentDetail>> {
    let mut builder = QueryBuilder::new(const_str::concat!(
        "SELECT ",
        DETAIL_FIELDS,
        " FROM comments c LEFT JOIN user u ON c.userid = u.userid WHERE 1=1"
    ));
    if let Some(userid) = userid {
        builder.push(" AND c.userid = ").push_bind(userid);
    }
    if let Some(goods_id) = goods_id {
        builder.push(" AND c.goods_id = ").push_bind(goods_id);
    }
    builder.push(" ORDER BY c.time DESC");

    builder.build_query_as().fetch_all(ctx.db()).await
}

pub async fn fetch_detail<C: Context>(
    ctx: &C,
    comment_id: i64,
) -> sqlx::Result<Option<CommentDetail>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        DETAIL_FIELDS,
        " FROM comments c LEFT JOIN user u ON c.userid = u.userid WHERE c.comment_id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(comment_id)
        .fetch_optional(ctx.db())
        .await
}

pub async fn create<C: Context>(
    ctx: &C,
    userid: i64,
    goods_id: i64,
    content: &str,
    image: Option<&str>,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (userid, goods_id, content, image, time) VALUES (?, ?, ?, ?, NOW())"
    );
    let result = sqlx::query(QUERY)
        .bind(userid)
        .bind(goods_id)
        .bind(content)
        .bind(image)
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}
