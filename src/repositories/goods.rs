use crate::common::context::Context;
use crate::entities::goods::{Goods, GoodsDetail};
use rust_decimal::Decimal;
use sqlx::QueryBuilder;

const TABLE_NAME: &str = "goods";
const READ_FIELDS: &str = "goods_id, userid, address, classify, title, content, price, \
image, imageone, label, likes, views, status, time";

pub struct NewGoods<'a> {
    pub userid: i64,
    pub address: Option<&'a str>,
    pub classify: Option<&'a str>,
    pub title: &'a str,
    pub content: &'a str,
    pub price: Decimal,
    pub image: Option<String>,
    pub imageone: Option<String>,
    pub label: &'a str,
    pub status: &'a str,
}

#[derive(Default)]
pub struct GoodsChanges {
    pub title: Option<String>,
    pub price: Option<Decimal>,
    pub content: Option<String>,
    pub classify: Option<String>,
    pub address: Option<String>,
    pub image: Option<String>,
    pub imageone: Option<String>,
}

impl GoodsChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.content.is_none()
            && self.classify.is_none()
            && self.address.is_none()
            && self.image.is_none()
            && self.imageone.is_none()
    }
}

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Goods>> {
    const QUERY: &str = const_str::concat!("SELECT ", READ_FIELDS, " FROM ", TABLE_NAME);
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub async fn fetch_by_user<C: Context>(ctx: &C, userid: i64) -> sqlx::Result<Vec<Goods>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE userid = ? ORDER BY goods_id DESC"
    );
    sqlx::query_as(QUERY).bind(userid).fetch_all(ctx.db()).await
}

/// Same rows as [`fetch_by_user`] but in publication order, as shown on a
/// seller's profile page.
pub async fn fetch_by_user_recent<C: Context>(ctx: &C, userid: i64) -> sqlx::Result<Vec<Goods>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE userid = ? ORDER BY time DESC"
    );
    sqlx::query_as(QUERY).bind(userid).fetch_all(ctx.db()).await
}

pub async fn fetch_detail<C: Context>(ctx: &C, goods_id: i64) -> sqlx::Result<Option<GoodsDetail>> {
    const QUERY: &str = "SELECT g.goods_id, g.userid, g.address, g.classify, g.title, g.content, \
         g.price, g.image, g.imageone, g.label, g.likes, g.views, g.status, g.time, \
         u.username, u.image AS user_image \
         FROM goods g LEFT JOIN user u ON g.userid = u.userid \
         WHERE g.goods_id = ?";
    sqlx::query_as(QUERY)
        .bind(goods_id)
        .fetch_optional(ctx.db())
        .await
}

pub async fn search_by_title<C: Context>(ctx: &C, term: &str) -> sqlx::Result<Vec<Goods>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE title LIKE ?"
    );
    sqlx::query_as(QUERY)
        .bind(format!("%{term}%"))
        .fetch_all(ctx.db())
        .await
}

pub async fn create<C: Context>(ctx: &C, goods: NewGoods<'_>) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (userid, address, classify, title, content, price, image, imageone, \
         label, likes, views, status, time) ",
        "VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, 0, 0, ?, NOW())"
    );
    let result = sqlx::query(QUERY)
        .bind(goods.userid)
        .bind(goods.address)
        .bind(goods.classify)
        .bind(goods.title)
        .bind(goods.content)
        .bind(goods.price)
        .bind(goods.image)
        .bind(goods.imageone)
        .bind(goods.label)
        .bind(goods.status)
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}

pub async fn update<C: Context>(
    ctx: &C,
    goods_id: i64,
    changes: GoodsChanges,
) -> sqlx::Result<u64> {
    let mut builder = QueryBuilder::new(const_str::concat!("UPDATE ", TABLE_NAME, " SET "));
    let mut fields = builder.separated(", ");
    if let Some(title) = changes.title {
        fields.push("title = ").push_bind_unseparated(title);
    }
    if let Some(price) = changes.price {
        fields.push("price = ").push_bind_unseparated(price);
    }
    if let Some(content) = changes.content {
        fields.push("content = ").push_bind_unseparated(content);
    }
    if let Some(classify) = changes.classify {
        fields.push("classify = ").push_bind_unseparated(classify);
    }
    if let Some(address) = changes.address {
        fields.push("address = ").push_bind_unseparated(address);
    }
    if let Some(image) = changes.image {
        fields.push("image = ").push_bind_unseparated(image);
    }
    if let Some(imageone) = changes.imageone {
        fields.push("imageone = ").push_bind_unseparated(imageone);
    }
    builder.push(" WHERE goods_id = ").push_bind(goods_id);

    let result = builder.build().execute(ctx.db()).await?;
    Ok(result.rows_affected())
}

pub async fn update_status<C: Context>(ctx: &C, goods_id: i64, status: &str) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET status = ? WHERE goods_id = ?"
    );
    let result = sqlx::query(QUERY)
        .bind(status)
        .bind(goods_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}

/// Recomputes the denormalized like counter for one goods row from the
/// `likes` table.
pub async fn refresh_likes_count<C: Context>(ctx: &C, goods_id: i64) -> sqlx::Result<()> {
    const QUERY: &str = "UPDATE goods \
         SET likes = (SELECT COUNT(*) FROM likes WHERE goods_id = ?) \
         WHERE goods_id = ?";
    sqlx::query(QUERY)
        .bind(goods_id)
        .bind(goods_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}

/// Recomputes the denormalized favorite counter (stored as `views`) for one
/// goods row from the `favorites` table.
pub async fn refresh_views_count<C: Context>(ctx: &C, goods_id: i64) -> sqlx::Result<()> {
    const QUERY: &str = "UPDATE goods \
         SET views = (SELECT COUNT(*) FROM favorites WHERE goods_id = ?) \
         WHERE goods_id = ?";
    sqlx::query(QUERY)
        .bind(goods_id)
        .bind(goods_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}

/// Full-table repair of the `likes` counters; returns affected rows.
pub async fn sync_likes_counts<C: Context>(ctx: &C) -> sqlx::Result<u64> {
    const QUERY: &str = "UPDATE goods g \
         SET likes = (SELECT COUNT(*) FROM likes l WHERE l.goods_id = g.goods_id)";
    let result = sqlx::query(QUERY).execute(ctx.db()).await?;
    Ok(result.rows_affected())
}

/// Full-table repair of the `views` counters; returns affected rows.
pub async fn sync_views_counts<C: Context>(ctx: &C) -> sqlx::Result<u64> {
    const QUERY: &str = "UPDATE goods g \
         SET views = (SELECT COUNT(*) FROM favorites f WHERE f.goods_id = g.goods_id)";
    let result = sqlx::query(QUERY).execute(ctx.db()).await?;
    Ok(result.rows_affected())
}
