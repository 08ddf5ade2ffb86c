use crate::api::RequestContext;
use crate::api::extract::FormPayload;
use crate::common::error::ServiceResponse;
use crate::common::state::AppState;
use crate::models::envelope::Envelope;
use crate::models::goods::{GoodsInfo, SearchArgs};
use crate::usecases::goods;
use axum::routing::post;
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(search))
}

pub async fn search(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<SearchArgs>,
) -> ServiceResponse<Envelope<Vec<GoodsInfo>>> {
    let goods = goods::search(&ctx, args).await?;
    Ok(Json(Envelope::ok(goods)))
}
