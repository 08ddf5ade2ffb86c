use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Conversation {
    pub conversation_id: i64,
    pub user1_id: i64,
    pub user2_id: i64,
    pub last_message_id: Option<i64>,
    pub last_message_time: Option<DateTime<Utc>>,
    pub user1_unread_count: i64,
    pub user2_unread_count: i64,
}

impl Conversation {
    pub fn has_participant(&self, userid: i64) -> bool {
        self.user1_id == userid || self.user2_id == userid
    }

    /// Unread counter belonging to the given participant.
    pub fn unread_count_for(&self, userid: i64) -> i64 {
        if self.user1_id == userid {
            self.user1_unread_count
        } else {
            self.user2_unread_count
        }
    }
}

/// One entry of a user's conversation list: the counterpart's identity, the
/// caller's unread counter and a snapshot of the latest message.
#[derive(Debug, FromRow)]
pub struct ConversationListItem {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_checks_cover_both_sides() {
        let conversation = Conversation {
            conversation_id: 1,
            user1_id: 1,
            user2_id: 2,
            last_message_id: None,
            last_message_time: None,
            user1_unread_count: 3,
            user2_unread_count: 5,
        };
        assert!(conversation.has_participant(1));
        assert!(conversation.has_participant(2));
        assert!(!conversation.has_participant(3));
        assert_eq!(conversation.unread_count_for(1), 3);
        assert_eq!(conversation.unread_count_for(2), 5);
    }
}
