pub mod addresses;
pub mod banners;
pub mod classify;
pub mod comments;
pub mod community;
pub mod conversations;
pub mod favorites;
pub mod goods;
pub mod likes;
pub mod messages;
pub mod orders;
pub mod replies;
pub mod responds;
pub mod users;
