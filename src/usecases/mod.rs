pub mod addresses;
pub mod banners;
pub mod classify;
pub mod comments;
pub mod community;
pub mod favorites;
pub mod goods;
pub mod likes;
pub mod messaging;
pub mod orders;
pub mod replies;
pub mod responds;
pub mod users;
