use crate::api::RequestContext;
use crate::api::extract::FormPayload;
use crate::common::error::{AppError, ServiceResponse, ServiceResult};
use crate::common::state::AppState;
use crate::models::envelope::{Envelope, EnvelopeBase};
use crate::models::messaging::{
    ConversationListResponse, DeleteConversationArgs, MarkReadArgs, MarkReadResult,
    MessagesPageQuery, MessagesPageResponse, SendMessageArgs, SendMessageResult,
};
use crate::models::messaging::UnreadStatsInfo;
use crate::models::uploads::UploadImageResult;
use crate::usecases::messaging;
use axum::extract::{Path, Query};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

const MESSAGE_PREFIX: &str = "msg";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages", post(send))
        .route("/messages/{conversation_id}", get(messages_page))
        .route("/conversations/{user_id}", get(conversations))
        .route("/conversations/{conversation_id}/read", put(mark_read))
        .route(
            "/conversations/{conversation_id}",
            delete(delete_conversation),
        )
        .route("/unread/{user_id}", get(unread))
        .route("/upload-image", post(upload_image))
}

pub async fn send(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<SendMessageArgs>,
) -> ServiceResponse<Envelope<SendMessageResult>> {
    let sent = messaging::send(&ctx, args).await?;
    Ok(Json(Envelope::ok_msg("发送成功", sent)))
}

pub async fn conversations(
    ctx: RequestContext,
    Path(user_id): Path<i64>,
) -> ServiceResult<Json<ConversationListResponse>> {
    let conversations = messaging::conversations_for_user(&ctx, user_id).await?;
    Ok(Json(ConversationListResponse {
        base: EnvelopeBase::ok(),
        total: conversations.len(),
        result: conversations,
    }))
}

pub async fn messages_page(
    ctx: RequestContext,
    Path(conversation_id): Path<i64>,
    Query(query): Query<MessagesPageQuery>,
) -> ServiceResult<Json<MessagesPageResponse>> {
    let (messages, page, limit) = messaging::messages_page(&ctx, conversation_id, query).await?;
    Ok(Json(MessagesPageResponse {
        base: EnvelopeBase::ok(),
        page,
        limit,
        total: messages.len(),
        result: messages,
    }))
}

pub async fn mark_read(
    ctx: RequestContext,
    Path(conversation_id): Path<i64>,
    FormPayload { args, .. }: FormPayload<MarkReadArgs>,
) -> ServiceResponse<Envelope<MarkReadResult>> {
    let marked = messaging::mark_read(&ctx, conversation_id, args.user_id).await?;
    Ok(Json(Envelope::ok_msg("标记已读成功", marked)))
}

pub async fn unread(
    ctx: RequestContext,
    Path(user_id): Path<i64>,
) -> ServiceResponse<Envelope<UnreadStatsInfo>> {
    let stats = messaging::unread_stats(&ctx, user_id).await?;
    Ok(Json(Envelope::ok(stats)))
}

pub async fn delete_conversation(
    ctx: RequestContext,
    Path(conversation_id): Path<i64>,
    FormPayload { args, .. }: FormPayload<DeleteConversationArgs>,
) -> ServiceResponse<Envelope<()>> {
    messaging::delete_conversation(&ctx, conversation_id, args.user_id).await?;
    Ok(Json(Envelope::msg_only("会话删除成功")))
}

pub async fn upload_image(
    ctx: RequestContext,
    mut payload: FormPayload<serde_json::Value>,
) -> ServiceResponse<Envelope<UploadImageResult>> {
    let Some(part) = payload.take_any_file() else {
        return Err(AppError::UploadsMissingFile);
    };
    let stored = ctx
        .uploads
        .store_image(
            MESSAGE_PREFIX,
            &part.file_name,
            part.content_type.as_deref(),
            &part.data,
        )
        .await?;
    Ok(Json(Envelope::ok_msg(
        "图片上传成功",
        UploadImageResult {
            image_url: stored.public_path,
            original_name: stored.original_name,
            file_size: stored.size,
        },
    )))
}
