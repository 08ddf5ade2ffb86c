use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::responds::{AddRespondArgs, CreatedRespond, ListRespondsArgs, RespondInfo};
use crate::repositories::responds;

pub async fn fetch<C: Context>(ctx: &C, args: ListRespondsArgs) -> ServiceResult<Vec<RespondInfo>> {
    match responds::fetch(ctx, args.community_id).await {
        Ok(responds) => Ok(responds.into_iter().map(RespondInfo::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn create<C: Context>(
    ctx: &C,
    args: AddRespondArgs,
    image: Option<String>,
) -> ServiceResult<CreatedRespond> {
    let (Some(userid), Some(community_id), Some(respond_content)) = (
        args.userid,
        args.community_id,
        args.respond_content.as_deref(),
    ) else {
        return Err(AppError::RespondMissingFields);
    };
    if respond_content.trim().is_empty() {
        return Err(AppError::RespondMissingFields);
    }

    let respond_image = image.or(args.respond_image);
    let respond_id = responds::create(
        ctx,
        userid,
        community_id,
        respond_content,
        respond_image.as_deref(),
    )
    .await? as i64;
    Ok(CreatedRespond {
        respond_id,
        userid,
        community_id,
        respond_content: respond_content.to_owned(),
        respond_image,
    })
}
