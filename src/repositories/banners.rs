use crate::common::context::Context;
use crate::entities::banners::Banner;

const TABLE_NAME: &str = "banner";
const READ_FIELDS: &str = "banner_id, banner_image, title";

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Banner>> {
    const QUERY: &str = const_str::concat!("SELECT ", READ_FIELDS, " FROM ", TABLE_NAME);
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}
