use crate::entities::conversations::ConversationListItem;
use crate::entities::messages::{MessageDetail, UnreadStats};
use crate::models::envelope::EnvelopeBase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub sender_id: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub receiver_id: Option<i64>,
    #[serde(default)]
    pub message_type: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub product_info: Option<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesPageQuery {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub user_id: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub user_id: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteConversationArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub user_id: Option<i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationInfo {
    pub conversation_id: i64,
    pub last_message_time: Option<DateTime<Utc>>,
    pub unread_count: i64,
    pub other_user_id: i64,
    pub other_user_name: Option<String>,
    pub other_user_avatar: Option<String>,
    pub last_message_content: Option<String>,
    pub last_message_type: Option<String>,
    pub last_message_sender_id: Option<i64>,
}

impl From<ConversationListItem> for ConversationInfo {
    fn from(item: ConversationListItem) -> Self {
        Self {
            conversation_id: item.conversation_id,
            last_message_time: item.last_message_time,
            unread_count: item.unread_count,
            other_user_id: item.other_user_id,
            other_user_name: item.other_user_name,
            other_user_avatar: item.other_user_avatar,
            last_message_content: item.last_message_content,
            last_message_type: item.last_message_type,
            last_message_sender_id: item.last_message_sender_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageInfo {
    pub message_id: i64,
    pub conversation_id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub message_type: String,
    pub content: String,
    pub image_url: Option<String>,
    pub file_url: Option<String>,
    pub product_info: Option<String>,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub sender_name: Option<String>,
    pub sender_avatar: Option<String>,
}

impl From<MessageDetail> for MessageInfo {
    fn from(detail: MessageDetail) -> Self {
        Self {
            message_id: detail.message.message_id,
            conversation_id: detail.message.conversation_id,
            sender_id: detail.message.sender_id,
            receiver_id: detail.message.receiver_id,
            message_type: detail.message.message_type,
            content: detail.message.content,
            image_url: detail.message.image_url,
            file_url: detail.message.file_url,
            product_info: detail.message.product_info,
            is_read: detail.message.is_read,
            read_at: detail.message.read_at,
            created_at: detail.message.created_at,
            sender_name: detail.sender_name,
            sender_avatar: detail.sender_avatar,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadStatsInfo {
    pub total_unread_messages: i64,
    pub unread_conversations: i64,
}

impl From<UnreadStats> for UnreadStatsInfo {
    fn from(stats: UnreadStats) -> Self {
        Self {
            total_unread_messages: stats.total_unread_messages,
            unread_conversations: stats.unread_conversations,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResult {
    pub message_id: i64,
    pub conversation_id: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadResult {
    pub marked_count: u64,
}

/// Conversation list carries the entry count next to `result`.
#[derive(Serialize)]
pub struct ConversationListResponse {
    #[serde(flatten)]
    pub base: EnvelopeBase,
    pub result: Vec<ConversationInfo>,
    pub total: usize,
}

/// Message pages carry their paging parameters next to `result`.
#[derive(Serialize)]
pub struct MessagesPageResponse {
    #[serde(flatten)]
    pub base: EnvelopeBase,
    pub result: Vec<MessageInfo>,
    pub page: i64,
    pub limit: i64,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_response_attaches_paging_beside_the_envelope() {
        let response = MessagesPageResponse {
            base: EnvelopeBase::ok(),
            result: Vec::new(),
            page: 2,
            limit: 20,
            total: 0,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], 200);
        assert_eq!(json["success"], "成功");
        assert_eq!(json["page"], 2);
        assert_eq!(json["limit"], 20);
        assert_eq!(json["total"], 0);
        assert_eq!(json["result"], serde_json::json!([]));
    }

    #[test]
    fn send_args_accept_camel_case_with_string_ids() {
        let args: SendMessageArgs = serde_json::from_str(
            r#"{"senderId": "1", "receiverId": 2, "messageType": "text", "content": "在吗"}"#,
        )
        .unwrap();
        assert_eq!(args.sender_id, Some(1));
        assert_eq!(args.receiver_id, Some(2));
        assert_eq!(args.message_type.as_deref(), Some("text"));
        assert_eq!(args.content.as_deref(), Some("在吗"));
    }
}
