use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::messaging::{
    ConversationInfo, MarkReadResult, MessageInfo, MessagesPageQuery, SendMessageArgs,
    SendMessageResult,
};
use crate::models::messaging::UnreadStatsInfo;
use crate::repositories::messages::NewMessage;
use crate::repositories::{conversations, messages};

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 100;

const TEXT_MESSAGE: &str = "text";
const PRODUCT_MESSAGE: &str = "product";

struct OutgoingMessage<'a> {
    sender_id: i64,
    receiver_id: i64,
    message_type: &'a str,
    content: &'a str,
    product_info: Option<String>,
}

/// Both participant ids and a non-empty `content` are required, even for
/// image and file messages (the client fills in a placeholder caption).
fn validate_send(args: &SendMessageArgs) -> ServiceResult<OutgoingMessage<'_>> {
    let (Some(sender_id), Some(receiver_id), Some(content)) =
        (args.sender_id, args.receiver_id, args.content.as_deref())
    else {
        return Err(AppError::MessagingMissingSendFields);
    };
    if content.is_empty() {
        return Err(AppError::MessagingMissingSendFields);
    }
    let message_type = args.message_type.as_deref().unwrap_or(TEXT_MESSAGE);
    // product_info only makes sense on product cards; drop it elsewhere.
    let product_info = match &args.product_info {
        Some(value) if message_type == PRODUCT_MESSAGE && !value.is_null() => {
            Some(serde_json::to_string(value)?)
        }
        _ => None,
    };
    Ok(OutgoingMessage {
        sender_id,
        receiver_id,
        message_type,
        content,
        product_info,
    })
}

/// Persists one message. Conversation lookup/creation, the message row and
/// the conversation's last-message bookkeeping commit as one transaction, so
/// a crash cannot leave a message without its unread counter bump.
pub async fn send<C: Context>(ctx: &C, args: SendMessageArgs) -> ServiceResult<SendMessageResult> {
    let outgoing = validate_send(&args)?;

    let mut tx = ctx.db().begin().await?;
    let conversation_id =
        conversations::get_or_create(&mut tx, outgoing.sender_id, outgoing.receiver_id).await?;
    let message_id = messages::insert(
        &mut tx,
        NewMessage {
            conversation_id,
            sender_id: outgoing.sender_id,
            receiver_id: outgoing.receiver_id,
            message_type: outgoing.message_type,
            content: outgoing.content,
            image_url: args.image_url.as_deref(),
            file_url: args.file_url.as_deref(),
            product_info: outgoing.product_info.as_deref(),
        },
    )
    .await?;
    conversations::record_last_message(&mut tx, conversation_id, message_id, outgoing.sender_id)
        .await?;
    tx.commit().await?;

    Ok(SendMessageResult {
        message_id,
        conversation_id,
    })
}

pub async fn conversations_for_user<C: Context>(
    ctx: &C,
    userid: i64,
) -> ServiceResult<Vec<ConversationInfo>> {
    match conversations::fetch_list_for_user(ctx, userid).await {
        Ok(items) => Ok(items.into_iter().map(ConversationInfo::from).collect()),
        Err(e) => unexpected(e),
    }
}

/// One page of chat history in chronological order. Fetching history never
/// touches read state; the client marks a conversation read through the
/// dedicated endpoint when it is opened.
pub async fn messages_page<C: Context>(
    ctx: &C,
    conversation_id: i64,
    query: MessagesPageQuery,
) -> ServiceResult<(Vec<MessageInfo>, i64, i64)> {
    let page = query.page.unwrap_or(DEFAULT_PAGE).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = (page - 1) * limit;

    let mut page_items = messages::fetch_page(ctx, conversation_id, limit, offset).await?;
    page_items.reverse();

    Ok((
        page_items.into_iter().map(MessageInfo::from).collect(),
        page,
        limit,
    ))
}

pub async fn mark_read<C: Context>(
    ctx: &C,
    conversation_id: i64,
    userid: Option<i64>,
) -> ServiceResult<MarkReadResult> {
    let Some(userid) = userid else {
        return Err(AppError::MessagingMissingReadFields);
    };
    let marked_count = mark_conversation_read(ctx, conversation_id, userid).await?;
    Ok(MarkReadResult { marked_count })
}

/// The message flags and the conversation counter move together or not at
/// all.
async fn mark_conversation_read<C: Context>(
    ctx: &C,
    conversation_id: i64,
    userid: i64,
) -> ServiceResult<u64> {
    let mut tx = ctx.db().begin().await?;
    let marked = messages::mark_read(&mut tx, conversation_id, userid).await?;
    conversations::reset_unread(&mut tx, conversation_id, userid).await?;
    tx.commit().await?;
    Ok(marked)
}

/// Unfiltered dump of every message, kept for the admin debug page.
pub async fn fetch_all_messages<C: Context>(ctx: &C) -> ServiceResult<Vec<MessageInfo>> {
    match messages::fetch_all(ctx).await {
        Ok(rows) => Ok(rows
            .into_iter()
            .map(|message| {
                MessageInfo::from(crate::entities::messages::MessageDetail {
                    message,
                    sender_name: None,
                    sender_avatar: None,
                })
            })
            .collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn unread_stats<C: Context>(ctx: &C, userid: i64) -> ServiceResult<UnreadStatsInfo> {
    match messages::unread_stats(ctx, userid).await {
        Ok(stats) => Ok(UnreadStatsInfo::from(stats)),
        Err(e) => unexpected(e),
    }
}

/// Removes a conversation and its messages. Only a participant may do this.
pub async fn delete_conversation<C: Context>(
    ctx: &C,
    conversation_id: i64,
    userid: Option<i64>,
) -> ServiceResult<()> {
    let Some(userid) = userid else {
        return Err(AppError::MessagingMissingUserId);
    };
    let Some(conversation) = conversations::fetch_one(ctx, conversation_id).await? else {
        return Err(AppError::MessagingForbidden);
    };
    if !conversation.has_participant(userid) {
        return Err(AppError::MessagingForbidden);
    }

    let mut tx = ctx.db().begin().await?;
    messages::delete_for_conversation(&mut tx, conversation_id).await?;
    conversations::delete(&mut tx, conversation_id).await?;
    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(content: Option<&str>) -> SendMessageArgs {
        SendMessageArgs {
            sender_id: Some(1),
            receiver_id: Some(2),
            message_type: None,
            content: content.map(str::to_owned),
            image_url: None,
            file_url: None,
            product_info: None,
        }
    }

    #[test]
    fn empty_content_is_rejected_even_with_an_attachment() {
        let mut empty = args(Some(""));
        empty.image_url = Some("uploads/msg_1.png".to_owned());
        assert!(matches!(
            validate_send(&empty),
            Err(AppError::MessagingMissingSendFields)
        ));
        assert!(matches!(
            validate_send(&args(None)),
            Err(AppError::MessagingMissingSendFields)
        ));
    }

    #[test]
    fn product_info_only_survives_on_product_messages() {
        let mut text = args(Some("看看这个"));
        text.product_info = Some(serde_json::json!({"goodsId": 3}));
        let outgoing = validate_send(&text).unwrap();
        assert_eq!(outgoing.message_type, TEXT_MESSAGE);
        assert!(outgoing.product_info.is_none());

        let mut product = args(Some("看看这个"));
        product.message_type = Some(PRODUCT_MESSAGE.to_owned());
        product.product_info = Some(serde_json::json!({"goodsId": 3}));
        let outgoing = validate_send(&product).unwrap();
        assert_eq!(
            outgoing.product_info.as_deref(),
            Some(r#"{"goodsId":3}"#)
        );
    }
}
