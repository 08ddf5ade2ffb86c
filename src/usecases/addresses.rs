use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::addresses::{
    AddAddressArgs, AddedAddress, AddressInfo, DeleteAddressArgs, ListAddressesArgs,
    UpdateAddressArgs,
};
use crate::repositories::addresses;

pub async fn fetch_by_user<C: Context>(
    ctx: &C,
    args: ListAddressesArgs,
) -> ServiceResult<Vec<AddressInfo>> {
    let Some(userid) = args.userid else {
        return Err(AppError::UsersMissingUserId);
    };
    match addresses::fetch_by_user(ctx, userid).await {
        Ok(addresses) => Ok(addresses.into_iter().map(AddressInfo::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn create<C: Context>(ctx: &C, args: AddAddressArgs) -> ServiceResult<AddedAddress> {
    let (Some(userid), Some(username), Some(phone), Some(area), Some(area_one)) = (
        args.userid,
        args.username.as_deref(),
        args.phone.as_deref(),
        args.area.as_deref(),
        args.area_one.as_deref(),
    ) else {
        return Err(AppError::AddressesMissingFields);
    };

    let address_id = addresses::create(ctx, userid, username, phone, area, area_one).await? as i64;
    Ok(AddedAddress { address_id })
}

pub async fn update<C: Context>(ctx: &C, args: UpdateAddressArgs) -> ServiceResult<()> {
    let (Some(address_id), Some(username), Some(phone), Some(area), Some(area_one)) = (
        args.address_id,
        args.username.as_deref(),
        args.phone.as_deref(),
        args.area.as_deref(),
        args.area_one.as_deref(),
    ) else {
        return Err(AppError::AddressesMissingFields);
    };

    let affected = addresses::update(ctx, address_id, username, phone, area, area_one).await?;
    if affected == 0 {
        return Err(AppError::AddressesNotFound);
    }
    Ok(())
}

pub async fn delete<C: Context>(ctx: &C, args: DeleteAddressArgs) -> ServiceResult<()> {
    let Some(address_id) = args.address_id else {
        return Err(AppError::AddressesMissingFields);
    };

    let affected = addresses::delete(ctx, address_id).await?;
    if affected == 0 {
        return Err(AppError::AddressesNotFound);
    }
    Ok(())
}
