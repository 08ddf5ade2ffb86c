use crate::api::RequestContext;
use crate::api::extract::FormPayload;
use crate::common::error::{ServiceResponse, ServiceResult};
use crate::common::state::AppState;
use crate::models::envelope::{Envelope, EnvelopeBase};
use crate::models::likes::{
    GoodsLikesArgs, LikeArgs, LikeCheck, LikeCount, LikeInfo, LikeListResponse, LikeWithGoodsInfo,
    UserLikesArgs,
};
use crate::usecases::likes;
use axum::routing::post;
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(add))
        .route("/remove", post(remove))
        .route("/check", post(check))
        .route("/list", post(list))
        .route("/user_likes", post(user_likes))
        .route("/count", post(count))
}

pub async fn add(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<LikeArgs>,
) -> ServiceResponse<Envelope<()>> {
    likes::add(&ctx, args).await?;
    Ok(Json(Envelope::msg_only("点赞成功")))
}

pub async fn remove(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<LikeArgs>,
) -> ServiceResponse<Envelope<()>> {
    likes::remove(&ctx, args).await?;
    Ok(Json(Envelope::msg_only("取消点赞成功")))
}

pub async fn check(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<LikeArgs>,
) -> ServiceResponse<Envelope<LikeCheck>> {
    let is_liked = likes::check(&ctx, args).await?;
    Ok(Json(Envelope::ok(LikeCheck { is_liked })))
}

pub async fn list(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<GoodsLikesArgs>,
) -> ServiceResult<Json<LikeListResponse<LikeInfo>>> {
    let likes = likes::fetch_by_goods(&ctx, args).await?;
    Ok(Json(LikeListResponse {
        base: EnvelopeBase::ok(),
        count: likes.len(),
        result: likes,
    }))
}

pub async fn user_likes(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<UserLikesArgs>,
) -> ServiceResult<Json<LikeListResponse<LikeWithGoodsInfo>>> {
    let likes = likes::fetch_by_user(&ctx, args).await?;
    Ok(Json(LikeListResponse {
        base: EnvelopeBase::ok(),
        count: likes.len(),
        result: likes,
    }))
}

pub async fn count(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<GoodsLikesArgs>,
) -> ServiceResponse<Envelope<LikeCount>> {
    let count = likes::count_for_goods(&ctx, args).await?;
    Ok(Json(Envelope::ok(count)))
}
