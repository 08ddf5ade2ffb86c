use crate::api::RequestContext;
use crate::api::extract::FormPayload;
use crate::common::error::{AppError, ServiceResponse};
use crate::common::state::AppState;
use crate::models::community::{AddPostArgs, CommunityPostInfo, CreatedPost, ListPostsArgs};
use crate::models::envelope::Envelope;
use crate::usecases::community;
use axum::routing::post;
use axum::{Json, Router};

const COMMUNITY_PREFIX: &str = "community";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(list))
        .route("/publish", post(publish))
        .route("/publish-with-files", post(publish))
        .route("/category", post(category))
}

pub async fn list(ctx: RequestContext) -> ServiceResponse<Envelope<Vec<CommunityPostInfo>>> {
    let posts = community::fetch(&ctx, ListPostsArgs { classify: None }).await?;
    Ok(Json(Envelope::ok(posts)))
}

pub async fn category(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<ListPostsArgs>,
) -> ServiceResponse<Envelope<Vec<CommunityPostInfo>>> {
    if args.classify.as_deref().is_none_or(|c| c.trim().is_empty()) {
        return Err(AppError::CommunityMissingClassify);
    }
    let posts = community::fetch(&ctx, args).await?;
    Ok(Json(Envelope::ok(posts)))
}

pub async fn publish(
    ctx: RequestContext,
    mut payload: FormPayload<AddPostArgs>,
) -> ServiceResponse<Envelope<CreatedPost>> {
    let image = match payload.take_any_file() {
        Some(part) => Some(
            ctx.uploads
                .store_image(
                    COMMUNITY_PREFIX,
                    &part.file_name,
                    part.content_type.as_deref(),
                    &part.data,
                )
                .await?
                .public_path,
        ),
        None => None,
    };
    let created = community::create(&ctx, payload.args, image).await?;
    Ok(Json(Envelope::ok_msg("发布成功", created)))
}
