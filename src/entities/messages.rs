use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Message {
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
}

/// Message joined with the sender's profile, as served in chat history.
#[derive(Debug, FromRow)]
pub struct MessageDetail {
    #[sqlx(flatten)]
    pub message: Message,
    pub sender_name: Option<String>,
    pub sender_avatar: Option<String>,
}

/// Aggregate unread counters for one user across all conversations.
#[derive(Debug, FromRow)]
pub struct UnreadStats {
    pub total_unread_messages: i64,
    pub unread_conversations: i64,
}
