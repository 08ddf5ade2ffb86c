use crate::api::RequestContext;
use crate::api::extract::FormPayload;
use crate::common::error::ServiceResponse;
use crate::common::state::AppState;
use crate::models::envelope::Envelope;
use crate::models::responds::{AddRespondArgs, CreatedRespond, ListRespondsArgs, RespondInfo};
use crate::usecases::responds;
use axum::routing::post;
use axum::{Json, Router};

const RESPOND_PREFIX: &str = "respond";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(list))
        .route("/add", post(add))
}

pub async fn list(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<ListRespondsArgs>,
) -> ServiceResponse<Envelope<Vec<RespondInfo>>> {
    let responds = responds::fetch(&ctx, args).await?;
    Ok(Json(Envelope::ok(responds)))
}

pub async fn add(
    ctx: RequestContext,
    mut payload: FormPayload<AddRespondArgs>,
) -> ServiceResponse<Envelope<CreatedRespond>> {
    let image = match payload.take_any_file() {
        Some(part) => Some(
            ctx.uploads
                .store_image(
                    RESPOND_PREFIX,
                    &part.file_name,
                    part.content_type.as_deref(),
                    &part.data,
                )
                .await?
                .public_path,
        ),
        None => None,
    };
    let created = responds::create(&ctx, payload.args, image).await?;
    Ok(Json(Envelope::ok_msg("回复成功", created)))
}
