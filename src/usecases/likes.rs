use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::likes::{
    GoodsLikesArgs, LikeArgs, LikeCount, LikeInfo, LikeWithGoodsInfo, UserLikesArgs,
};
use crate::repositories::{goods, likes};
use tracing::error;

pub async fn check<C: Context>(ctx: &C, args: LikeArgs) -> ServiceResult<bool> {
    let (Some(userid), Some(goods_id)) = (args.userid, args.goods_id) else {
        return Err(AppError::LikesMissingFields);
    };
    match likes::exists(ctx, userid, goods_id).await {
        Ok(exists) => Ok(exists),
        Err(e) => unexpected(e),
    }
}

pub async fn add<C: Context>(ctx: &C, args: LikeArgs) -> ServiceResult<()> {
    let (Some(userid), Some(goods_id)) = (args.userid, args.goods_id) else {
        return Err(AppError::LikesMissingFields);
    };
    if likes::exists(ctx, userid, goods_id).await? {
        return Err(AppError::LikesAlreadyExists);
    }

    likes::create(ctx, userid, goods_id).await?;
    refresh_counter(ctx, goods_id).await;
    Ok(())
}

pub async fn remove<C: Context>(ctx: &C, args: LikeArgs) -> ServiceResult<()> {
    let (Some(userid), Some(goods_id)) = (args.userid, args.goods_id) else {
        return Err(AppError::LikesMissingFields);
    };

    let affected = likes::delete(ctx, userid, goods_id).await?;
    if affected == 0 {
        return Err(AppError::LikesNotFound);
    }
    refresh_counter(ctx, goods_id).await;
    Ok(())
}

pub async fn fetch_by_goods<C: Context>(
    ctx: &C,
    args: GoodsLikesArgs,
) -> ServiceResult<Vec<LikeInfo>> {
    let Some(goods_id) = args.goods_id else {
        return Err(AppError::LikesMissingFields);
    };
    match likes::fetch_by_goods(ctx, goods_id).await {
        Ok(likes) => Ok(likes.into_iter().map(LikeInfo::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_by_user<C: Context>(
    ctx: &C,
    args: UserLikesArgs,
) -> ServiceResult<Vec<LikeWithGoodsInfo>> {
    let Some(userid) = args.userid else {
        return Err(AppError::LikesMissingFields);
    };
    match likes::fetch_by_user_with_goods(ctx, userid).await {
        Ok(items) => Ok(items.into_iter().map(LikeWithGoodsInfo::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn count_for_goods<C: Context>(ctx: &C, args: GoodsLikesArgs) -> ServiceResult<LikeCount> {
    let Some(goods_id) = args.goods_id else {
        return Err(AppError::LikesMissingFields);
    };
    let like_count = likes::count_for_goods(ctx, goods_id).await?;
    Ok(LikeCount {
        goods_id,
        like_count,
    })
}

async fn refresh_counter<C: Context>(ctx: &C, goods_id: i64) {
    if let Err(e) = goods::refresh_likes_count(ctx, goods_id).await {
        error!(goods_id, "like counter refresh failed: {e}");
    }
}
