use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::replies::{AddReplyArgs, CreatedReply, ListRepliesArgs, ReplyInfo};
use crate::repositories::replies;
use chrono::Utc;

pub async fn fetch_for_comment<C: Context>(
    ctx: &C,
    args: ListRepliesArgs,
) -> ServiceResult<Vec<ReplyInfo>> {
    let Some(comment_id) = args.comment_id else {
        return Err(AppError::ReplyMissingFields);
    };
    match replies::fetch_for_comment(ctx, comment_id, args.userid).await {
        Ok(replies) => Ok(replies.into_iter().map(ReplyInfo::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn create<C: Context>(ctx: &C, args: AddReplyArgs) -> ServiceResult<CreatedReply> {
    let (Some(userid), Some(comment_id), Some(reply_content)) =
        (args.userid, args.comment_id, args.reply_content.as_deref())
    else {
        return Err(AppError::ReplyMissingFields);
    };
    if reply_content.trim().is_empty() {
        return Err(AppError::ReplyMissingFields);
    }

    let reply_id =
        replies::create(ctx, userid, comment_id, reply_content, args.reply_image.as_deref())
            .await? as i64;
    Ok(CreatedReply {
        reply_id,
        userid,
        comment_id,
        reply_content: reply_content.to_owned(),
        reply_image: args.reply_image,
        reply_time: Utc::now(),
    })
}
