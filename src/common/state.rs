use crate::common::codes::VerificationCodes;
use crate::common::uploads::UploadStore;
use sqlx::{MySql, Pool};

#[derive(Clone)]
pub struct AppState {
    pub db: Pool<MySql>,
    pub codes: VerificationCodes,
    pub uploads: UploadStore,
}
