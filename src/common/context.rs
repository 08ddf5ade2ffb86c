use sqlx::{MySql, Pool};

pub trait Context: Sync + Send {
    fn db(&self) -> &Pool<MySql>;
    fn codes(&self) -> &crate::common::codes::VerificationCodes;
    fn uploads(&self) -> &crate::common::uploads::UploadStore;
}
