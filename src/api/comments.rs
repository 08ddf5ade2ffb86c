use crate::api::RequestContext;
use crate::api::extract::FormPayload;
use crate::common::error::ServiceResponse;
use crate::common::state::AppState;
use crate::models::comments::{AddCommentArgs, CommentInfo, ListCommentsArgs};
use crate::models::envelope::Envelope;
use crate::usecases::comments;
use axum::routing::post;
use axum::{Json, Router};

const COMMENT_PREFIX: &str = "comment";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(list))
        .route("/add", post(add))
}

pub async fn list(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<ListCommentsArgs>,
) -> ServiceResponse<Envelope<Vec<CommentInfo>>> {
    let comments = comments::fetch_filtered(&ctx, args).await?;
    Ok(Json(Envelope::ok(comments)))
}

pub async fn add(
    ctx: RequestContext,
    mut payload: FormPayload<AddCommentArgs>,
) -> ServiceResponse<Envelope<CommentInfo>> {
    let image = match payload.take_any_file() {
        Some(part) => Some(
            ctx.uploads
                .store_image(
                    COMMENT_PREFIX,
                    &part.file_name,
                    part.content_type.as_deref(),
                    &part.data,
                )
                .await?
                .public_path,
        ),
        None => None,
    };
    let comment = comments::create(&ctx, payload.args, image).await?;
    Ok(Json(Envelope::ok_msg("评价成功", comment)))
}
