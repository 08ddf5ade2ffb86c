use crate::entities::banners::Banner;
use serde::Serialize;

#[derive(Serialize)]
pub struct BannerInfo {
    pub banner_id: i64,
    pub banner_image: String,
    pub title: Option<String>,
}

impl From<Banner> for BannerInfo {
    fn from(banner: Banner) -> Self {
        Self {
            banner_id: banner.banner_id,
            banner_image: banner.banner_image,
            title: banner.title,
        }
    }
}
