use crate::common::context::Context;
use crate::entities::community::CommunityPost;

const TABLE_NAME: &str = "community";

const DETAIL_QUERY: &str = "SELECT c.community_id, c.userid, c.content, c.classify, \
     c.community_image, c.time, u.username, u.image \
     FROM community c \
     LEFT JOIN user u ON c.userid = u.userid";

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<CommunityPost>> {
    const QUERY: &str = const_str::concat!(DETAIL_QUERY, " ORDER BY c.time DESC");
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub async fn fetch_by_classify<C: Context>(
    ctx: &C,
    classify: &str,
) -> sqlx::Result<Vec<CommunityPost>> {
    const QUERY: &str = const_str::concat!(
        DETAIL_QUERY,
        " WHERE c.classify = ? ORDER BY c.time DESC"
    );
    sqlx::query_as(QUERY)
        .bind(classify)
        .fetch_all(ctx.db())
        .await
}

pub async fn create<C: Context>(
    ctx: &C,
    userid: i64,
    content: &str,
    classify: &str,
    community_image: Option<&str>,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (userid, content, classify, time, community_image) VALUES (?, ?, ?, NOW(), ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(userid)
        .bind(content)
        .bind(classify)
        .bind(community_image)
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}
