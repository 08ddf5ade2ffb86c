use crate::api::RequestContext;
use crate::api::extract::FormPayload;
use crate::common::error::ServiceResponse;
use crate::common::state::AppState;
use crate::models::addresses::{
    AddAddressArgs, AddedAddress, AddressInfo, DeleteAddressArgs, ListAddressesArgs,
    UpdateAddressArgs,
};
use crate::models::envelope::Envelope;
use crate::usecases::addresses;
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
    FormPayload { args, .. }: FormPayload<ListAddressesArgs>,
) -> ServiceResponse<Envelope<Vec<AddressInfo>>> {
    let addresses = addresses::fetch_by_user(&ctx, args).await?;
    Ok(Json(Envelope::ok(addresses)))
}

pub async fn add(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<AddAddressArgs>,
) -> ServiceResponse<Envelope<AddedAddress>> {
    let added = addresses::create(&ctx, args).await?;
    Ok(Json(Envelope::ok_msg("添加成功", added)))
}

pub async fn update(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<UpdateAddressArgs>,
) -> ServiceResponse<Envelope<()>> {
    addresses::update(&ctx, args).await?;
    Ok(Json(Envelope::msg_only("修改成功")))
}

pub async fn delete(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<DeleteAddressArgs>,
) -> ServiceResponse<Envelope<()>> {
    addresses::delete(&ctx, args).await?;
    Ok(Json(Envelope::msg_only("删除成功")))
}
