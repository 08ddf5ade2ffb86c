use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::favorites::{FavoriteArgs, FavoriteInfo, FavoriteListArgs};
use crate::repositories::{favorites, goods};
use tracing::error;

pub async fn fetch_by_user<C: Context>(
    ctx: &C,
    args: FavoriteListArgs,
) -> ServiceResult<Vec<FavoriteInfo>> {
    let Some(userid) = args.userid else {
        return Err(AppError::FavoritesMissingFields);
    };
    match favorites::fetch_items_by_user(ctx, userid).await {
        Ok(items) => Ok(items.into_iter().map(FavoriteInfo::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn check<C: Context>(ctx: &C, args: FavoriteArgs) -> ServiceResult<bool> {
    let (Some(userid), Some(goods_id)) = (args.userid, args.goods_id) else {
        return Err(AppError::FavoritesMissingFields);
    };
    match favorites::exists(ctx, userid, goods_id).await {
        Ok(exists) => Ok(exists),
        Err(e) => unexpected(e),
    }
}

pub async fn add<C: Context>(ctx: &C, args: FavoriteArgs) -> ServiceResult<()> {
    let (Some(userid), Some(goods_id)) = (args.userid, args.goods_id) else {
        return Err(AppError::FavoritesMissingFields);
    };
    if favorites::exists(ctx, userid, goods_id).await? {
        return Err(AppError::FavoritesAlreadyExists);
    }

    favorites::create(ctx, userid, goods_id).await?;
    refresh_counter(ctx, goods_id).await;
    Ok(())
}

pub async fn remove<C: Context>(ctx: &C, args: FavoriteArgs) -> ServiceResult<()> {
    let (Some(userid), Some(goods_id)) = (args.userid, args.goods_id) else {
        return Err(AppError::FavoritesMissingFields);
    };

    let affected = favorites::delete(ctx, userid, goods_id).await?;
    if affected == 0 {
        return Err(AppError::FavoritesNotFound);
    }
    refresh_counter(ctx, goods_id).await;
    Ok(())
}

/// The denormalized counter repair is best effort; the favorite row is the
/// source of truth and a later sync pass can fix drift.
async fn refresh_counter<C: Context>(ctx: &C, goods_id: i64) {
    if let Err(e) = goods::refresh_views_count(ctx, goods_id).await {
        error!(goods_id, "favorite counter refresh failed: {e}");
    }
}
