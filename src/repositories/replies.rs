use crate::common::context::Context;
use crate::entities::replies::ReplyDetail;

const TABLE_NAME: &str = "reply";

pub async fn fetch_for_comment<C: Context>(
    ctx: &C,
    comment_id: i64,
    userid: Option<i64>,
) -> sqlx::Result<Vec<ReplyDetail>> {
    const DETAIL_QUERY: &str = "SELECT r.reply_id, r.userid, r.comment_id, r.reply_content, \
         r.reply_image, r.reply_time, u.username, u.image AS user_image \
         FROM reply r \
         LEFT JOIN user u ON r.userid = u.userid \
         WHERE r.comment_id = ?";
    match userid {
        Some(userid) => {
            const QUERY: &str = const_str::concat!(
                DETAIL_QUERY,
                " AND r.userid = ? ORDER BY r.reply_time DESC"
            );
            sqlx::query_as(QUERY)
                .bind(comment_id)
                .bind(userid)
                .fetch_all(ctx.db())
                .await
        }
        None => {
            const QUERY: &str = const_str::concat!(DETAIL_QUERY, " ORDER BY r.reply_time DESC");
            sqlx::query_as(QUERY)
                .bind(comment_id)
                .fetch_all(ctx.db())
                .await
        }
    }
}

pub async fn create<C: Context>(
    ctx: &C,
    userid: i64,
    comment_id: i64,
    reply_content: &str,
    reply_image: Option<&str>,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (userid, comment_id, reply_content, reply_image, reply_time) VALUES (?, ?, ?, ?, NOW())"
    );
    let result = sqlx::query(QUERY)
        .bind(userid)
        .bind(comment_id)
        .bind(reply_content)
        .bind(reply_image)
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}
