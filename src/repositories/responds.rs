use crate::common::context::Context;
use crate::entities::responds::RespondDetail;

const TABLE_NAME: &str = "respond";

const DETAIL_QUERY: &str = "SELECT r.respond_id, r.userid, r.community_id, r.respond_content, \
     r.respond_image, r.time, u.username, u.image AS user_image \
     FROM respond r \
     LEFT JOIN user u ON r.userid = u.userid";

pub async fn fetch<C: Context>(
    ctx: &C,
    community_id: Option<i64>,
) -> sqlx::Result<Vec<RespondDetail>> {
    match community_id {
        Some(community_id) => {
            const QUERY: &str = const_str::concat!(
                DETAIL_QUERY,
                " WHERE r.community_id = ? ORDER BY r.time DESC"
            );
            sqlx::query_as(QUERY)
                .bind(community_id)
                .fetch_all(ctx.db())
                .await
        }
        None => {
            const QUERY: &str = const_str::concat!(DETAIL_QUERY, " ORDER BY r.time DESC");
            sqlx::query_as(QUERY).fetch_all(ctx.db()).await
        }
    }
}

pub async fn create<C: Context>(
    ctx: &C,
    userid: i64,
    community_id: i64,
    respond_content: &str,
    respond_image: Option<&str>,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (userid, community_id, respond_content, respond_image, time) VALUES (?, ?, ?, ?, NOW())"
    );
    let result = sqlx::query(QUERY)
        .bind(userid)
        .bind(community_id)
        .bind(respond_content)
        .bind(respond_image)
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}
