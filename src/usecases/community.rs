use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::community::{AddPostArgs, CommunityPostInfo, CreatedPost, ListPostsArgs};
use crate::repositories::community;

/// The client sends this literal tab name when no category filter applies.
const ALL_CLASSIFY: &str = "全部";

pub async fn fetch<C: Context>(ctx: &C, args: ListPostsArgs) -> ServiceResult<Vec<CommunityPostInfo>> {
    let result = match args.classify.as_deref() {
        Some(classify) if classify != ALL_CLASSIFY => {
            community::fetch_by_classify(ctx, classify).await
        }
        _ => community::fetch_all(ctx).await,
    };
    match result {
        Ok(posts) => Ok(posts.into_iter().map(CommunityPostInfo::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn create<C: Context>(
    ctx: &C,
    args: AddPostArgs,
    image: Option<String>,
) -> ServiceResult<CreatedPost> {
    let (Some(userid), Some(content), Some(classify)) =
        (args.userid, args.content.as_deref(), args.classify.as_deref())
    else {
        return Err(AppError::CommunityMissingFields);
    };
    if content.trim().is_empty() || classify.trim().is_empty() {
        return Err(AppError::CommunityMissingFields);
    }

    let community_image = image.or(args.community_image);
    let community_id =
        community::create(ctx, userid, content, classify, community_image.as_deref()).await? as i64;
    Ok(CreatedPost {
        community_id,
        userid,
        content: content.to_owned(),
        classify: classify.to_owned(),
        community_image,
    })
}
