use crate::common::context::Context;
use crate::common::error::{ServiceResult, unexpected};
use crate::models::banners::BannerInfo;
use crate::repositories::banners;

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<BannerInfo>> {
    match banners::fetch_all(ctx).await {
        Ok(banners) => Ok(banners.into_iter().map(BannerInfo::from).collect()),
        Err(e) => unexpected(e),
    }
}
