use crate::api::RequestContext;
use crate::api::extract::{FilePart, FormPayload};
use crate::common::error::{AppError, ServiceResponse, ServiceResult};
use crate::common::state::AppState;
use crate::models::envelope::Envelope;
use crate::models::goods::{
    GoodsDetailArgs, GoodsDetailInfo, GoodsInfo, SellerInfoResult, SyncCountsResult,
    UpdateGoodsArgs, UpdateStatusArgs, UpdatedStatus, UploadGoodsArgs, UploadedGoods,
    UserGoodsArgs,
};
use crate::usecases::goods;
use axum::routing::post;
use axum::{Json, Router};

const GOODS_PREFIX: &str = "goods";
const MAX_IMAGES: usize = 9;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(list))
        .route("/user_goods", post(user_goods))
        .route("/upload", post(upload))
        .route("/update", post(update))
        .route("/update_status", post(update_status))
        .route("/detail", post(detail))
        .route("/seller_info", post(seller_info))
        .route("/sync_counts", post(sync_counts))
}

pub async fn list(ctx: RequestContext) -> ServiceResponse<Envelope<Vec<GoodsInfo>>> {
    let goods = goods::fetch_all(&ctx).await?;
    Ok(Json(Envelope::ok(goods)))
}

pub async fn user_goods(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<UserGoodsArgs>,
) -> ServiceResponse<Envelope<Vec<GoodsInfo>>> {
    let goods = goods::fetch_by_user(&ctx, args).await?;
    Ok(Json(Envelope::ok(goods)))
}

pub async fn upload(
    ctx: RequestContext,
    mut payload: FormPayload<UploadGoodsArgs>,
) -> ServiceResponse<Envelope<UploadedGoods>> {
    let (image, imageone) = store_listing_images(&ctx, payload.files.drain(..).collect()).await?;
    let created = goods::upload(&ctx, payload.args, image, imageone).await?;
    Ok(Json(Envelope::ok_msg("发布成功", created)))
}

pub async fn update(
    ctx: RequestContext,
    mut payload: FormPayload<UpdateGoodsArgs>,
) -> ServiceResponse<Envelope<()>> {
    let (image, imageone) = store_listing_images(&ctx, payload.files.drain(..).collect()).await?;
    goods::update(&ctx, payload.args, image, imageone).await?;
    Ok(Json(Envelope::msg_only("修改成功")))
}

pub async fn update_status(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<UpdateStatusArgs>,
) -> ServiceResponse<Envelope<UpdatedStatus>> {
    let updated = goods::update_status(&ctx, args).await?;
    Ok(Json(Envelope::ok_msg("状态更新成功", updated)))
}

pub async fn detail(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<GoodsDetailArgs>,
) -> ServiceResponse<Envelope<GoodsDetailInfo>> {
    let detail = goods::fetch_detail(&ctx, args).await?;
    Ok(Json(Envelope::ok(detail)))
}

pub async fn seller_info(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<UserGoodsArgs>,
) -> ServiceResponse<Envelope<SellerInfoResult>> {
    let Some(userid) = args.userid else {
        return Err(AppError::GoodsMissingUserId);
    };
    let info = goods::seller_info(&ctx, userid).await?;
    Ok(Json(Envelope::ok(info)))
}

pub async fn sync_counts(ctx: RequestContext) -> ServiceResponse<Envelope<SyncCountsResult>> {
    let result = goods::sync_counts(&ctx).await?;
    Ok(Json(Envelope::ok_msg("同步成功", result)))
}

/// Listings accept up to nine images; the storefront only renders the first
/// two, which are the ones persisted on the goods row.
async fn store_listing_images(
    ctx: &RequestContext,
    files: Vec<FilePart>,
) -> ServiceResult<(Option<String>, Option<String>)> {
    let mut stored = Vec::new();
    for part in files.into_iter().take(MAX_IMAGES) {
        let upload = ctx
            .uploads
            .store_image(
                GOODS_PREFIX,
                &part.file_name,
                part.content_type.as_deref(),
                &part.data,
            )
            .await?;
        stored.push(upload.public_path);
    }
    let mut stored = stored.into_iter();
    Ok((stored.next(), stored.next()))
}
