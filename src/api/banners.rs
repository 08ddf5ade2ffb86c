use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::common::state::AppState;
use crate::models::banners::BannerInfo;
use crate::models::envelope::Envelope;
use crate::usecases::banners;
use axum::routing::post;
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(list))
}

pub async fn list(ctx: RequestContext) -> ServiceResponse<Envelope<Vec<BannerInfo>>> {
    let banners = banners::fetch_all(&ctx).await?;
    Ok(Json(Envelope::ok(banners)))
}
