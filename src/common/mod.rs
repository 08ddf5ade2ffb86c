pub mod codes;
pub mod context;
pub mod env;
pub mod error;
pub mod init;
pub mod state;
pub mod uploads;
