use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::common::state::AppState;
use crate::models::envelope::Envelope;
use crate::models::messaging::MessageInfo;
use crate::usecases::messaging;
use axum::routing::post;
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(dump))
}

/// Raw dump of the messages table, kept for the admin debug page.
pub async fn dump(ctx: RequestContext) -> ServiceResponse<Envelope<Vec<MessageInfo>>> {
    let messages = messaging::fetch_all_messages(&ctx).await?;
    Ok(Json(Envelope::ok(messages)))
}
