use crate::common::context::Context;
use crate::entities::classify::Classify;

const TABLE_NAME: &str = "classify";
const READ_FIELDS: &str = "classify_id, name";

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Classify>> {
    const QUERY: &str = const_str::concat!("SELECT ", READ_FIELDS, " FROM ", TABLE_NAME);
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}
