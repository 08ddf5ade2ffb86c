use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::orders::{
    AddOrderArgs, CreatedOrder, DeleteOrderArgs, DeletedOrder, ListOrdersArgs, OrderInfo,
    UpdateOrderArgs, UpdatedOrder,
};
use crate::repositories::{goods, orders};
use crate::usecases;
use tracing::error;

const DEFAULT_STATUS: &str = "已购";

pub async fn fetch_detailed<C: Context>(
    ctx: &C,
    args: ListOrdersArgs,
) -> ServiceResult<Vec<OrderInfo>> {
    match orders::fetch_detailed(ctx, args.userid).await {
        Ok(orders) => Ok(orders.into_iter().map(OrderInfo::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn create<C: Context>(ctx: &C, args: AddOrderArgs) -> ServiceResult<CreatedOrder> {
    let (Some(userid), Some(goods_id), Some(address_id)) =
        (args.userid, args.goods_id, args.address_id)
    else {
        return Err(AppError::OrdersMissingFields);
    };
    let status = args.status.unwrap_or_else(|| DEFAULT_STATUS.to_owned());

    let order_id = orders::create(ctx, userid, goods_id, address_id, &status).await? as i64;

    // The goods row is flipped after the order exists. A failure here is
    // tolerated: the order stands and the flag tells the client about it.
    let goods_status_updated = match goods::update_status(ctx, goods_id, usecases::goods::SOLD).await
    {
        Ok(_) => true,
        Err(e) => {
            error!(order_id, goods_id, "goods status flip failed after order: {e}");
            false
        }
    };

    Ok(CreatedOrder {
        order_id,
        userid,
        goods_id,
        address_id,
        status,
        goods_status_updated,
    })
}

pub async fn update_status<C: Context>(ctx: &C, args: UpdateOrderArgs) -> ServiceResult<UpdatedOrder> {
    let (Some(order_id), Some(status)) = (args.order_id, args.status) else {
        return Err(AppError::OrdersMissingFields);
    };

    let affected = orders::update_status(ctx, order_id, &status).await?;
    if affected == 0 {
        return Err(AppError::OrdersNotFound);
    }
    Ok(UpdatedOrder { order_id, status })
}

pub async fn delete<C: Context>(ctx: &C, args: DeleteOrderArgs) -> ServiceResult<DeletedOrder> {
    let (Some(order_id), Some(userid)) = (args.order_id, args.userid) else {
        return Err(AppError::OrdersMissingFields);
    };

    let affected = orders::delete(ctx, order_id, userid).await?;
    if affected == 0 {
        return Err(AppError::OrdersNotFound);
    }
    Ok(DeletedOrder { order_id })
}
