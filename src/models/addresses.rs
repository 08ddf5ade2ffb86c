use crate::entities::addresses::Address;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ListAddressesArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
}

#[derive(Deserialize)]
pub struct AddAddressArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub userid: Option<i64>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub area: Option<String>,
    pub area_one: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateAddressArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub address_id: Option<i64>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub area: Option<String>,
    pub area_one: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteAddressArgs {
    #[serde(default, deserialize_with = "crate::models::flex::opt_i64")]
    pub address_id: Option<i64>,
}

#[derive(Serialize)]
pub struct AddressInfo {
    pub address_id: i64,
    pub userid: i64,
    pub username: String,
    pub phone: String,
    pub area: String,
    pub area_one: String,
}

impl From<Address> for AddressInfo {
    fn from(address: Address) -> Self {
        Self {
            address_id: address.address_id,
            userid: address.userid,
            username: address.username,
            phone: address.phone,
            area: address.area,
            area_one: address.area_one,
        }
    }
}

#[derive(Serialize)]
pub struct AddedAddress {
    pub address_id: i64,
}
