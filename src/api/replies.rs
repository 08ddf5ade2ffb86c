use crate::api::RequestContext;
use crate::api::extract::FormPayload;
use crate::common::error::{AppError, ServiceResponse, ServiceResult};
use crate::common::state::AppState;
use crate::models::envelope::{Envelope, EnvelopeBase};
use crate::models::replies::{AddReplyArgs, CreatedReply, ListRepliesArgs, ReplyImageResponse, ReplyInfo};
use crate::usecases::replies;
use axum::routing::post;
use axum::{Json, Router};

const REPLY_PREFIX: &str = "reply";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(list))
        .route("/add", post(add))
        .route("/upload-image", post(upload_image))
}

pub async fn list(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<ListRepliesArgs>,
) -> ServiceResponse<Envelope<Vec<ReplyInfo>>> {
    let replies = replies::fetch_for_comment(&ctx, args).await?;
    Ok(Json(Envelope::ok(replies)))
}

pub async fn add(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<AddReplyArgs>,
) -> ServiceResponse<Envelope<CreatedReply>> {
    let created = replies::create(&ctx, args).await?;
    Ok(Json(Envelope::ok_msg("回复成功", created)))
}

/// Standalone image upload. The path lands next to the envelope, not inside
/// `result`; the reply composer depends on that shape.
pub async fn upload_image(
    ctx: RequestContext,
    mut payload: FormPayload<serde_json::Value>,
) -> ServiceResult<Json<ReplyImageResponse>> {
    let Some(part) = payload.take_any_file() else {
        return Err(AppError::UploadsMissingFile);
    };
    let stored = ctx
        .uploads
        .store_image(
            REPLY_PREFIX,
            &part.file_name,
            part.content_type.as_deref(),
            &part.data,
        )
        .await?;
    Ok(Json(ReplyImageResponse {
        base: EnvelopeBase::ok_msg("图片上传成功"),
        image_path: stored.public_path,
    }))
}
