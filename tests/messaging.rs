//! Messaging invariants exercised against a live MySQL instance. The tests
//! return early when DATABASE_URL is unset, so the rest of the suite stays
//! runnable without a database. Each test uses fresh user ids, which keeps
//! runs independent even though the tables are shared.

use campus_market_service::common::codes::VerificationCodes;
use campus_market_service::common::context::Context;
use campus_market_service::common::error::AppError;
use campus_market_service::common::uploads::UploadStore;
use campus_market_service::models::messaging::{MessagesPageQuery, SendMessageArgs};
use campus_market_service::usecases::messaging;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::{MySql, Pool};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const USER_DDL: &str = "CREATE TABLE IF NOT EXISTS `user` (
    `userid`    BIGINT NOT NULL AUTO_INCREMENT,
    `username`  VARCHAR(64),
    `account`   VARCHAR(64),
    `password`  VARCHAR(128),
    `phone`     VARCHAR(16),
    `sex`       VARCHAR(8),
    `identity`  VARCHAR(32),
    `image`     VARCHAR(255),
    PRIMARY KEY (`userid`)
) ENGINE = InnoDB DEFAULT CHARSET = utf8mb4";

const CONVERSATIONS_DDL: &str = "CREATE TABLE IF NOT EXISTS `conversations` (
    `conversation_id`    BIGINT NOT NULL AUTO_INCREMENT,
    `user1_id`           BIGINT NOT NULL,
    `user2_id`           BIGINT NOT NULL,
    `last_message_id`    BIGINT NULL,
    `last_message_time`  DATETIME NULL,
    `user1_unread_count` BIGINT NOT NULL DEFAULT 0,
    `user2_unread_count` BIGINT NOT NULL DEFAULT 0,
    PRIMARY KEY (`conversation_id`),
    UNIQUE KEY `uq_conversations_pair` (`user1_id`, `user2_id`)
) ENGINE = InnoDB DEFAULT CHARSET = utf8mb4";

const MESSAGES_DDL: &str = "CREATE TABLE IF NOT EXISTS `messages` (
    `message_id`      BIGINT NOT NULL AUTO_INCREMENT,
    `conversation_id` BIGINT NOT NULL,
    `sender_id`       BIGINT NOT NULL,
    `receiver_id`     BIGINT NOT NULL,
    `message_type`    VARCHAR(16) NOT NULL DEFAULT 'text',
    `content`         TEXT        NOT NULL,
    `image_url`       VARCHAR(255),
    `file_url`        VARCHAR(255),
    `product_info`    TEXT,
    `is_read`         BOOLEAN  NOT NULL DEFAULT FALSE,
    `read_at`         DATETIME NULL,
    `created_at`      DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
    PRIMARY KEY (`message_id`)
) ENGINE = InnoDB DEFAULT CHARSET = utf8mb4";

struct TestContext {
    db: Pool<MySql>,
    codes: VerificationCodes,
    uploads: UploadStore,
    _uploads_dir: tempfile::TempDir,
}

impl Context for TestContext {
    fn db(&self) -> &Pool<MySql> {
        &self.db
    }

    fn codes(&self) -> &VerificationCodes {
        &self.codes
    }

    fn uploads(&self) -> &UploadStore {
        &self.uploads
    }
}

async fn test_context() -> Option<TestContext> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let db = MySqlPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .ok()?;
    for ddl in [USER_DDL, CONVERSATIONS_DDL, MESSAGES_DDL] {
        sqlx::query(ddl).execute(&db).await.ok()?;
    }
    let uploads_dir = tempfile::tempdir().ok()?;
    Some(TestContext {
        codes: VerificationCodes::new(Duration::from_secs(300)),
        uploads: UploadStore::new(uploads_dir.path(), 5 * 1024 * 1024),
        _uploads_dir: uploads_dir,
        db,
    })
}

/// Ids no other run has used, so shared tables do not leak state between
/// tests.
fn fresh_user_id() -> i64 {
    static BASE: OnceLock<i64> = OnceLock::new();
    static COUNTER: AtomicI64 = AtomicI64::new(0);
    let base = *BASE.get_or_init(|| {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as i64;
        millis * 1_000
    });
    base + COUNTER.fetch_add(1, Ordering::Relaxed)
}

fn text_message(sender_id: i64, receiver_id: i64, content: &str) -> SendMessageArgs {
    SendMessageArgs {
        sender_id: Some(sender_id),
        receiver_id: Some(receiver_id),
        message_type: None,
        content: Some(content.to_owned()),
        image_url: None,
        file_url: None,
        product_info: None,
    }
}

fn first_page(limit: i64) -> MessagesPageQuery {
    MessagesPageQuery {
        page: Some(1),
        limit: Some(limit),
        user_id: None,
    }
}

#[tokio::test]
async fn sending_bumps_the_receivers_unread_count_not_the_senders() {
    let Some(ctx) = test_context().await else {
        return;
    };
    let (seller, buyer) = (fresh_user_id(), fresh_user_id());

    messaging::send(&ctx, text_message(seller, buyer, "这本书还在吗"))
        .await
        .unwrap();

    let inbox = messaging::conversations_for_user(&ctx, buyer).await.unwrap();
    let entry = inbox
        .iter()
        .find(|c| c.other_user_id == seller)
        .expect("receiver should see the conversation");
    assert_eq!(entry.unread_count, 1);
    assert_eq!(entry.last_message_content.as_deref(), Some("这本书还在吗"));
    assert_eq!(entry.last_message_sender_id, Some(seller));

    let outbox = messaging::conversations_for_user(&ctx, seller)
        .await
        .unwrap();
    let entry = outbox
        .iter()
        .find(|c| c.other_user_id == buyer)
        .expect("sender should see the conversation");
    assert_eq!(entry.unread_count, 0);
}

#[tokio::test]
async fn conversation_is_reused_in_both_directions() {
    let Some(ctx) = test_context().await else {
        return;
    };
    let (a, b) = (fresh_user_id(), fresh_user_id());

    let first = messaging::send(&ctx, text_message(a, b, "在吗")).await.unwrap();
    let second = messaging::send(&ctx, text_message(b, a, "在的")).await.unwrap();
    assert_eq!(first.conversation_id, second.conversation_id);

    // One unread each: the reply went the other way.
    for (user, other) in [(a, b), (b, a)] {
        let list = messaging::conversations_for_user(&ctx, user).await.unwrap();
        let entry = list.iter().find(|c| c.other_user_id == other).unwrap();
        assert_eq!(entry.unread_count, 1);
    }
}

#[tokio::test]
async fn marking_read_is_idempotent() {
    let Some(ctx) = test_context().await else {
        return;
    };
    let (a, b) = (fresh_user_id(), fresh_user_id());

    let sent = messaging::send(&ctx, text_message(a, b, "降价了")).await.unwrap();
    messaging::send(&ctx, text_message(a, b, "还要吗")).await.unwrap();

    let marked = messaging::mark_read(&ctx, sent.conversation_id, Some(b))
        .await
        .unwrap();
    assert_eq!(marked.marked_count, 2);

    let again = messaging::mark_read(&ctx, sent.conversation_id, Some(b))
        .await
        .unwrap();
    assert_eq!(again.marked_count, 0);

    let list = messaging::conversations_for_user(&ctx, b).await.unwrap();
    let entry = list.iter().find(|c| c.other_user_id == a).unwrap();
    assert_eq!(entry.unread_count, 0);

    let stats = messaging::unread_stats(&ctx, b).await.unwrap();
    assert_eq!(stats.total_unread_messages, 0);
}

#[tokio::test]
async fn fetching_history_does_not_mark_messages_read() {
    let Some(ctx) = test_context().await else {
        return;
    };
    let (a, b) = (fresh_user_id(), fresh_user_id());

    let sent = messaging::send(&ctx, text_message(a, b, "明天交易？")).await.unwrap();

    let query = MessagesPageQuery {
        page: Some(1),
        limit: Some(20),
        user_id: Some(b),
    };
    let (page, _, _) = messaging::messages_page(&ctx, sent.conversation_id, query)
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert!(!page[0].is_read);

    let list = messaging::conversations_for_user(&ctx, b).await.unwrap();
    let entry = list.iter().find(|c| c.other_user_id == a).unwrap();
    assert_eq!(entry.unread_count, 1);
}

#[tokio::test]
async fn history_pages_are_chronological_and_bounded_by_limit() {
    let Some(ctx) = test_context().await else {
        return;
    };
    let (a, b) = (fresh_user_id(), fresh_user_id());

    let sent = messaging::send(&ctx, text_message(a, b, "第一条")).await.unwrap();
    messaging::send(&ctx, text_message(b, a, "第二条")).await.unwrap();
    messaging::send(&ctx, text_message(a, b, "第三条")).await.unwrap();

    let (page, page_no, limit) = messaging::messages_page(&ctx, sent.conversation_id, first_page(2))
        .await
        .unwrap();
    assert_eq!((page_no, limit), (1, 2));
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].content, "第二条");
    assert_eq!(page[1].content, "第三条");

    let older = MessagesPageQuery {
        page: Some(2),
        limit: Some(2),
        user_id: None,
    };
    let (page, _, _) = messaging::messages_page(&ctx, sent.conversation_id, older)
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].content, "第一条");
}

#[tokio::test]
async fn deleting_a_conversation_cascades_and_checks_membership() {
    let Some(ctx) = test_context().await else {
        return;
    };
    let (a, b, stranger) = (fresh_user_id(), fresh_user_id(), fresh_user_id());

    let sent = messaging::send(&ctx, text_message(a, b, "已到货")).await.unwrap();

    let denied = messaging::delete_conversation(&ctx, sent.conversation_id, Some(stranger)).await;
    assert_eq!(denied, Err(AppError::MessagingForbidden));

    messaging::delete_conversation(&ctx, sent.conversation_id, Some(a))
        .await
        .unwrap();

    let (page, _, _) = messaging::messages_page(&ctx, sent.conversation_id, first_page(20))
        .await
        .unwrap();
    assert!(page.is_empty());

    let list = messaging::conversations_for_user(&ctx, b).await.unwrap();
    assert!(list.iter().all(|c| c.other_user_id != a));
}
