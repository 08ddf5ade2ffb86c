use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::comments::{AddCommentArgs, CommentInfo, ListCommentsArgs};
use crate::repositories::comments;

pub async fn fetch_filtered<C: Context>(
    ctx: &C,
    args: ListCommentsArgs,
) -> ServiceResult<Vec<CommentInfo>> {
    match comments::fetch_filtered(ctx, args.userid, args.goods_id).await {
        Ok(comments) => Ok(comments.into_iter().map(CommentInfo::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn create<C: Context>(
    ctx: &C,
    args: AddCommentArgs,
    image: Option<String>,
) -> ServiceResult<CommentInfo> {
    let (Some(userid), Some(goods_id), Some(content)) =
        (args.userid, args.goods_id, args.content.as_deref())
    else {
        return Err(AppError::CommentsMissingFields);
    };
    if content.trim().is_empty() {
        return Err(AppError::CommentsMissingFields);
    }

    let comment_id = comments::create(ctx, userid, goods_id, content, image.as_deref()).await? as i64;
    match comments::fetch_detail(ctx, comment_id).await? {
        Some(detail) => Ok(CommentInfo::from(detail)),
        None => unexpected(anyhow::anyhow!("comment {comment_id} vanished after insert")),
    }
}
