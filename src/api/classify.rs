use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::common::state::AppState;
use crate::models::classify::ClassifyInfo;
use crate::models::envelope::Envelope;
use crate::usecases::classify;
use axum::routing::post;
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(list))
}

pub async fn list(ctx: RequestContext) -> ServiceResponse<Envelope<Vec<ClassifyInfo>>> {
    let categories = classify::fetch_all(&ctx).await?;
    Ok(Json(Envelope::ok(categories)))
}
