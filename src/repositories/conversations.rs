use crate::common::context::Context;
use crate::entities::conversations::{Conversation, ConversationListItem};
use sqlx::MySqlConnection;

const TABLE_NAME: &str = "conversations";
const READ_FIELDS: &str = "conversation_id, user1_id, user2_id, last_message_id, \
last_message_time, user1_unread_count, user2_unread_count";

/// Canonical participant ordering: the smaller id is always `user1_id`, so an
/// unordered pair maps to exactly one row.
pub fn canonical_pair(a: i64, b: i64) -> (i64, i64) {
    (a.min(b), a.max(b))
}

/// Looks up the conversation for a pair of users, creating it when absent.
/// Backed by the UNIQUE key on (user1_id, user2_id): the no-op upsert routes
/// the existing row's id through LAST_INSERT_ID, so concurrent first messages
/// between the same pair converge on one conversation.
pub async fn get_or_create(
    conn: &mut MySqlConnection,
    user_a: i64,
    user_b: i64,
) -> sqlx::Result<i64> {
    let (user1_id, user2_id) = canonical_pair(user_a, user_b);
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (user1_id, user2_id) VALUES (?, ?) ",
        "ON DUPLICATE KEY UPDATE conversation_id = LAST_INSERT_ID(conversation_id)"
    );
    let result = sqlx::query(QUERY)
        .bind(user1_id)
        .bind(user2_id)
        .execute(&mut *conn)
        .await?;
    Ok(result.last_insert_id() as i64)
}

pub async fn fetch_one<C: Context>(
    ctx: &C,
    conversation_id: i64,
) -> sqlx::Result<Option<Conversation>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE conversation_id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(conversation_id)
        .fetch_optional(ctx.db())
        .await
}

/// Points the conversation at its newest message and bumps the unread
/// counter of whichever participant is not the sender.
pub async fn record_last_message(
    conn: &mut MySqlConnection,
    conversation_id: i64,
    message_id: i64,
    sender_id: i64,
) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET last_message_id = ?, last_message_time = NOW(), \
         user1_unread_count = CASE WHEN user1_id = ? THEN user1_unread_count \
         ELSE user1_unread_count + 1 END, \
         user2_unread_count = CASE WHEN user2_id = ? THEN user2_unread_count \
         ELSE user2_unread_count + 1 END \
         WHERE conversation_id = ?"
    );
    sqlx::query(QUERY)
        .bind(message_id)
        .bind(sender_id)
        .bind(sender_id)
        .bind(conversation_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Zeroes the unread counter on whichever side `userid` occupies.
pub async fn reset_unread(
    conn: &mut MySqlConnection,
    conversation_id: i64,
    userid: i64,
) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET user1_unread_count = CASE WHEN user1_id = ? THEN 0 ELSE user1_unread_count END, \
         user2_unread_count = CASE WHEN user2_id = ? THEN 0 ELSE user2_unread_count END \
         WHERE conversation_id = ?"
    );
    sqlx::query(QUERY)
        .bind(userid)
        .bind(userid)
        .bind(conversation_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

pub async fn fetch_list_for_user<C: Context>(
    ctx: &C,
    userid: i64,
) -> sqlx::Result<Vec<ConversationListItem>> {
    const QUERY: &str = "SELECT \
         c.conversation_id, \
         c.last_message_time, \
         CASE WHEN c.user1_id = ? THEN c.user1_unread_count \
              ELSE c.user2_unread_count END AS unread_count, \
         CASE WHEN c.user1_id = ? THEN c.user2_id ELSE c.user1_id END AS other_user_id, \
         CASE WHEN c.user1_id = ? THEN u2.username ELSE u1.username END AS other_user_name, \
         CASE WHEN c.user1_id = ? THEN u2.image ELSE u1.image END AS other_user_avatar, \
         m.content AS last_message_content, \
         m.message_type AS last_message_type, \
         m.sender_id AS last_message_sender_id \
         FROM conversations c \
         LEFT JOIN user u1 ON c.user1_id = u1.userid \
         LEFT JOIN user u2 ON c.user2_id = u2.userid \
         LEFT JOIN messages m ON c.last_message_id = m.message_id \
         WHERE c.user1_id = ? OR c.user2_id = ? \
         ORDER BY c.last_message_time DESC";
    sqlx::query_as(QUERY)
        .bind(userid)
        .bind(userid)
        .bind(userid)
        .bind(userid)
        .bind(userid)
        .bind(userid)
        .fetch_all(ctx.db())
        .await
}

pub async fn delete(conn: &mut MySqlConnection, conversation_id: i64) -> sqlx::Result<u64> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_is_ordered_regardless_of_direction() {
        assert_eq!(canonical_pair(1, 2), (1, 2));
        assert_eq!(canonical_pair(2, 1), (1, 2));
        assert_eq!(canonical_pair(7, 7), (7, 7));
    }
}
