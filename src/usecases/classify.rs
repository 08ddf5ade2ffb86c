use crate::common::context::Context;
use crate::common::error::{ServiceResult, unexpected};
use crate::models::classify::ClassifyInfo;
use crate::repositories::classify;

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<ClassifyInfo>> {
    match classify::fetch_all(ctx).await {
        Ok(categories) => Ok(categories.into_iter().map(ClassifyInfo::from).collect()),
        Err(e) => unexpected(e),
    }
}
