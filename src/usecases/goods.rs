use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::goods::{
    GoodsDetailArgs, GoodsDetailInfo, GoodsInfo, SearchArgs, SellerInfoResult, SellerProfile,
    SellerStatistics, SyncCountsResult, UpdateGoodsArgs, UpdateStatusArgs, UpdatedStatus,
    UploadGoodsArgs, UploadedGoods, UserGoodsArgs,
};
use crate::repositories::goods::{GoodsChanges, NewGoods};
use crate::repositories::{goods, users};
use rust_decimal::Decimal;

/// Labels are assigned at publication time, picked at random the way the
/// storefront always has.
const LABELS: [&str; 7] = [
    "卖家信用良好",
    "回复超快",
    "百分百好评",
    "特价",
    "卖家很懒",
    "优质",
    "好评",
];

const VALID_STATUSES: [&str; 4] = ["在售", "下架", "已售", "已售出"];

const ON_SALE: &str = "在售";
pub const SOLD: &str = "已购";

fn random_label() -> &'static str {
    LABELS[rand::random_range(0..LABELS.len())]
}

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<GoodsInfo>> {
    match goods::fetch_all(ctx).await {
        Ok(goods) => Ok(goods.into_iter().map(GoodsInfo::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_by_user<C: Context>(ctx: &C, args: UserGoodsArgs) -> ServiceResult<Vec<GoodsInfo>> {
    let Some(userid) = args.userid else {
        return Err(AppError::GoodsMissingUserId);
    };
    match goods::fetch_by_user(ctx, userid).await {
        Ok(goods) => Ok(goods.into_iter().map(GoodsInfo::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_detail<C: Context>(
    ctx: &C,
    args: GoodsDetailArgs,
) -> ServiceResult<GoodsDetailInfo> {
    let Some(goods_id) = args.goods_id else {
        return Err(AppError::GoodsMissingId);
    };
    match goods::fetch_detail(ctx, goods_id).await? {
        Some(detail) => Ok(GoodsDetailInfo::from(detail)),
        None => Err(AppError::GoodsNotFound),
    }
}

pub async fn search<C: Context>(ctx: &C, args: SearchArgs) -> ServiceResult<Vec<GoodsInfo>> {
    let result = match args.title.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => goods::search_by_title(ctx, term).await,
        _ => goods::fetch_all(ctx).await,
    };
    match result {
        Ok(goods) => Ok(goods.into_iter().map(GoodsInfo::from).collect()),
        Err(e) => unexpected(e),
    }
}

/// The seller page bundles the seller's public profile, aggregate counters
/// and their listings in publication order.
pub async fn seller_info<C: Context>(ctx: &C, userid: i64) -> ServiceResult<SellerInfoResult> {
    let Some(user) = users::fetch_one(ctx, userid).await? else {
        return Err(AppError::UsersNotFound);
    };
    let listings = goods::fetch_by_user_recent(ctx, userid).await?;

    let statistics = SellerStatistics {
        total_goods: listings.len(),
        on_sale_goods: listings.iter().filter(|g| g.status == ON_SALE).count(),
        sold_goods: listings
            .iter()
            .filter(|g| g.status != ON_SALE && g.status != "下架")
            .count(),
        total_likes: listings.iter().map(|g| g.likes).sum(),
        total_views: listings.iter().map(|g| g.views).sum(),
    };

    Ok(SellerInfoResult {
        user_info: SellerProfile {
            userid: user.userid,
            username: user.username,
            avatar: user.image,
            phone: user.phone,
        },
        statistics,
        goods_list: listings.into_iter().map(GoodsInfo::from).collect(),
    })
}

pub async fn upload<C: Context>(
    ctx: &C,
    args: UploadGoodsArgs,
    image: Option<String>,
    imageone: Option<String>,
) -> ServiceResult<UploadedGoods> {
    let Some(userid) = args.userid else {
        return Err(AppError::GoodsMissingUserId);
    };

    let goods_id = goods::create(
        ctx,
        NewGoods {
            userid,
            address: args.address.as_deref(),
            classify: args.classify.as_deref(),
            title: args.title.as_deref().unwrap_or_default(),
            content: args.content.as_deref().unwrap_or_default(),
            price: args.price.unwrap_or(Decimal::ZERO),
            image,
            imageone,
            label: random_label(),
            status: ON_SALE,
        },
    )
    .await? as i64;
    Ok(UploadedGoods { goods_id })
}

pub async fn update<C: Context>(
    ctx: &C,
    args: UpdateGoodsArgs,
    image: Option<String>,
    imageone: Option<String>,
) -> ServiceResult<()> {
    let Some(goods_id) = args.goods_id else {
        return Err(AppError::GoodsMissingId);
    };
    let changes = GoodsChanges {
        title: args.title,
        price: args.price,
        content: args.content,
        classify: args.classify,
        address: args.address,
        image,
        imageone,
    };
    if changes.is_empty() {
        return Err(AppError::GoodsNothingToUpdate);
    }

    let affected = goods::update(ctx, goods_id, changes).await?;
    if affected == 0 {
        return Err(AppError::GoodsNotFound);
    }
    Ok(())
}

pub async fn update_status<C: Context>(
    ctx: &C,
    args: UpdateStatusArgs,
) -> ServiceResult<UpdatedStatus> {
    let (Some(goods_id), Some(status)) = (args.goods_id, args.status) else {
        return Err(AppError::GoodsMissingStatusFields);
    };
    if !VALID_STATUSES.contains(&status.as_str()) {
        return Err(AppError::GoodsInvalidStatus);
    }

    let affected = goods::update_status(ctx, goods_id, &status).await?;
    if affected == 0 {
        return Err(AppError::GoodsNotFound);
    }
    Ok(UpdatedStatus {
        goods_id,
        status,
        affected_rows: affected,
    })
}

/// Full-table repair of the denormalized like/favorite counters.
pub async fn sync_counts<C: Context>(ctx: &C) -> ServiceResult<SyncCountsResult> {
    let likes_updated = goods::sync_likes_counts(ctx).await?;
    let views_updated = goods::sync_views_counts(ctx).await?;
    Ok(SyncCountsResult {
        likes_updated,
        views_updated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_come_from_the_fixed_pool() {
        for _ in 0..32 {
            assert!(LABELS.contains(&random_label()));
        }
    }

    #[test]
    fn status_pool_accepts_both_sold_spellings() {
        assert!(VALID_STATUSES.contains(&"已售"));
        assert!(VALID_STATUSES.contains(&"已售出"));
        assert!(!VALID_STATUSES.contains(&"已购"));
    }
}
