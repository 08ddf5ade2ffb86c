use crate::api::RequestContext;
use crate::api::extract::FormPayload;
use crate::common::error::ServiceResponse;
use crate::common::state::AppState;
use crate::models::envelope::Envelope;
use crate::models::favorites::{FavoriteArgs, FavoriteCheck, FavoriteInfo, FavoriteListArgs};
use crate::usecases::favorites;
use axum::routing::post;
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", post(list))
        .route("/add", post(add))
        .route("/remove", post(remove))
        .route("/check", post(check))
}

pub async fn list(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<FavoriteListArgs>,
) -> ServiceResponse<Envelope<Vec<FavoriteInfo>>> {
    let favorites = favorites::fetch_by_user(&ctx, args).await?;
    Ok(Json(Envelope::ok(favorites)))
}

pub async fn add(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<FavoriteArgs>,
) -> ServiceResponse<Envelope<()>> {
    favorites::add(&ctx, args).await?;
    Ok(Json(Envelope::msg_only("收藏成功")))
}

pub async fn remove(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<FavoriteArgs>,
) -> ServiceResponse<Envelope<()>> {
    favorites::remove(&ctx, args).await?;
    Ok(Json(Envelope::msg_only("取消收藏成功")))
}

pub async fn check(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<FavoriteArgs>,
) -> ServiceResponse<Envelope<FavoriteCheck>> {
    let is_favorited = favorites::check(&ctx, args).await?;
    Ok(Json(Envelope::ok(FavoriteCheck { is_favorited })))
}
