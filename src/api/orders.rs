use crate::api::RequestContext;
use crate::api::extract::FormPayload;
use crate::common::error::ServiceResponse;
use crate::common::state::AppState;
use crate::models::envelope::Envelope;
use crate::models::orders::{
    AddOrderArgs, CreatedOrder, DeleteOrderArgs, DeletedOrder, ListOrdersArgs, OrderInfo,
    UpdateOrderArgs, UpdatedOrder,
};
use crate::usecases::orders;
use axum::routing::post;
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(list))
        .route("/add", post(add))
        .route("/update", post(update))
        .route("/delete", post(delete))
}

pub async fn list(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<ListOrdersArgs>,
) -> ServiceResponse<Envelope<Vec<OrderInfo>>> {
    let orders = orders::fetch_detailed(&ctx, args).await?;
    Ok(Json(Envelope::ok(orders)))
}

pub async fn add(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<AddOrderArgs>,
) -> ServiceResponse<Envelope<CreatedOrder>> {
    let created = orders::create(&ctx, args).await?;
    Ok(Json(Envelope::ok_msg("订单创建成功", created)))
}

pub async fn update(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<UpdateOrderArgs>,
) -> ServiceResponse<Envelope<UpdatedOrder>> {
    let updated = orders::update_status(&ctx, args).await?;
    Ok(Json(Envelope::ok_msg("订单更新成功", updated)))
}

pub async fn delete(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<DeleteOrderArgs>,
) -> ServiceResponse<Envelope<DeletedOrder>> {
    let deleted = orders::delete(&ctx, args).await?;
    Ok(Json(Envelope::ok_msg("订单删除成功", deleted)))
}
