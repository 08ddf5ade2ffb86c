use crate::common::context::Context;
use crate::entities::messages::{Message, MessageDetail, UnreadStats};
use sqlx::MySqlConnection;

const TABLE_NAME: &str = "messages";
const READ_FIELDS: &str = "message_id, conversation_id, sender_id, receiver_id, message_type, \
content, image_url, file_url, product_info, is_read, read_at, created_at";

pub struct NewMessage<'a> {
    pub conversation_id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub message_type: &'a str,
    pub content: &'a str,
    pub image_url: Option<&'a str>,
    pub file_url: Option<&'a str>,
    pub product_info: Option<&'a str>,
}

pub async fn insert(conn: &mut MySqlConnection, message: NewMessage<'_>) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (conversation_id, sender_id, receiver_id, message_type, content, \
         image_url, file_url, product_info) ",
        "VALUES (?, ?, ?, ?, ?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(message.conversation_id)
        .bind(message.sender_id)
        .bind(message.receiver_id)
        .bind(message.message_type)
        .bind(message.content)
        .bind(message.image_url)
        .bind(message.file_url)
        .bind(message.product_info)
        .execute(&mut *conn)
        .await?;
    Ok(result.last_insert_id() as i64)
}

/// One offset/limit window of a conversation's history, newest first.
pub async fn fetch_page<C: Context>(
    ctx: &C,
    conversation_id: i64,
    limit: i64,
    offset: i64,
) -> sqlx::Result<Vec<MessageDetail>> {
    const QUERY: &str = "SELECT m.message_id, m.conversation_id, m.sender_id, m.receiver_id, \
         m.message_type, m.content, m.image_url, m.file_url, m.product_info, \
         m.is_read, m.read_at, m.created_at, \
         u.username AS sender_name, u.image AS sender_avatar \
         FROM messages m \
         LEFT JOIN user u ON m.sender_id = u.userid \
         WHERE m.conversation_id = ? \
         ORDER BY m.created_at DESC, m.message_id DESC \
         LIMIT ? OFFSET ?";
    sqlx::query_as(QUERY)
        .bind(conversation_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(ctx.db())
        .await
}

/// Flips unread messages addressed to `userid` within the conversation.
pub async fn mark_read(
    conn: &mut MySqlConnection,
    conversation_id: i64,
    userid: i64,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET is_read = TRUE, read_at = NOW() \
         WHERE conversation_id = ? AND receiver_id = ? AND is_read = FALSE"
    );
    let result = sqlx::query(QUERY)
        .bind(conversation_id)
        .bind(userid)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}

pub async fn unread_stats<C: Context>(ctx: &C, userid: i64) -> sqlx::Result<UnreadStats> {
    const QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) AS total_unread_messages, \
         COUNT(DISTINCT conversation_id) AS unread_conversations FROM ",
        TABLE_NAME,
        " WHERE receiver_id = ? AND is_read = FALSE"
    );
    sqlx::query_as(QUERY).bind(userid).fetch_one(ctx.db()).await
}

pub async fn delete_for_conversation(
    conn: &mut MySqlConnection,
    conversation_id: i64,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "DELETE FROM ",
        TABLE_NAME,
        " WHERE conversation_id = ?"
    );
    let result = sqlx::query(QUERY)
        .bind(conversation_id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}

/// Unfiltered dump of the messages table (legacy debug surface).
pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Message>> {
    const QUERY: &str = const_str::concat!("SELECT ", READ_FIELDS, " FROM ", TABLE_NAME);
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}
