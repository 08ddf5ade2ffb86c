use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

#[derive(Debug, PartialEq)]
pub enum AppError {
    Unexpected,
    DecodingRequestFailed,

    UsersMissingCredentials,
    UsersInvalidCredentials,
    UsersMissingUserId,
    UsersNotFound,
    UsersNothingToUpdate,
    UsersInvalidPhone,
    UsersMissingCode,
    UsersCodeNotFound,
    UsersCodeExpired,
    UsersCodeMismatch,
    UsersMissingPasswordFields,
    UsersWrongOldPassword,
    UsersMissingPhoneFields,

    AddressesMissingFields,
    AddressesNotFound,

    GoodsMissingId,
    GoodsMissingUserId,
    GoodsMissingStatusFields,
    GoodsInvalidStatus,
    GoodsNothingToUpdate,
    GoodsNotFound,

    OrdersMissingFields,
    OrdersNotFound,

    FavoritesMissingFields,
    FavoritesAlreadyExists,
    FavoritesNotFound,

    LikesMissingFields,
    LikesAlreadyExists,
    LikesNotFound,

    CommentsMissingFields,

    ReplyMissingFields,

    CommunityMissingFields,
    CommunityMissingClassify,

    RespondMissingFields,

    MessagingMissingSendFields,
    MessagingMissingReadFields,
    MessagingMissingUserId,
    MessagingForbidden,

    UploadsMissingFile,
    UploadsNotAnImage,
    UploadsTooLarge,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    /// Numeric code mirrored into the response envelope.
    pub const fn code(&self) -> u16 {
        match self {
            AppError::Unexpected => 500,

            AppError::MessagingForbidden => 403,

            AppError::UsersNotFound
            | AppError::AddressesNotFound
            | AppError::GoodsNotFound
            | AppError::OrdersNotFound => 404,

            _ => 400,
        }
    }

    /// Client-facing message, kept verbatim from the mobile client's
    /// expectations (the app displays these strings as-is).
    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected => "服务器内部错误",
            AppError::DecodingRequestFailed => "请求数据格式错误，请确保发送正确的JSON格式",

            AppError::UsersMissingCredentials => "请提供账号(account)或手机号(phone)",
            AppError::UsersInvalidCredentials => "账号或密码错误",
            AppError::UsersMissingUserId => "用户ID不能为空",
            AppError::UsersNotFound => "用户不存在",
            AppError::UsersNothingToUpdate => "没有要更新的字段",
            AppError::UsersInvalidPhone => "请输入正确的手机号",
            AppError::UsersMissingCode => "请输入验证码",
            AppError::UsersCodeNotFound => "验证码不存在或已过期，请重新获取",
            AppError::UsersCodeExpired => "验证码已过期，请重新获取",
            AppError::UsersCodeMismatch => "验证码错误",
            AppError::UsersMissingPasswordFields => "请提供用户ID、旧密码和新密码",
            AppError::UsersWrongOldPassword => "用户不存在或旧密码错误",
            AppError::UsersMissingPhoneFields => "请提供用户ID和新手机号",

            AppError::AddressesMissingFields => "所有字段都不能为空",
            AppError::AddressesNotFound => "地址不存在",

            AppError::GoodsMissingId => "商品ID不能为空",
            AppError::GoodsMissingUserId => "用户ID不能为空",
            AppError::GoodsMissingStatusFields => "商品ID和状态不能为空",
            AppError::GoodsInvalidStatus => "无效的状态值",
            AppError::GoodsNothingToUpdate => "没有要更新的数据",
            AppError::GoodsNotFound => "商品不存在",

            AppError::OrdersMissingFields => "缺少必要参数",
            AppError::OrdersNotFound => "订单不存在或无权限删除",

            AppError::FavoritesMissingFields => "用户ID和商品ID不能为空",
            AppError::FavoritesAlreadyExists => "已经收藏过该商品",
            AppError::FavoritesNotFound => "该商品未收藏",

            AppError::LikesMissingFields => "用户ID和商品ID不能为空",
            AppError::LikesAlreadyExists => "已经点赞过该商品",
            AppError::LikesNotFound => "该商品未点赞",

            AppError::CommentsMissingFields => "用户ID、商品ID和评价内容不能为空",

            AppError::ReplyMissingFields => "用户ID、评论ID和回复内容不能为空",

            AppError::CommunityMissingFields => "用户ID、内容和分类不能为空",
            AppError::CommunityMissingClassify => "分类参数不能为空",

            AppError::RespondMissingFields => "用户ID、动态ID和回复内容不能为空",

            AppError::MessagingMissingSendFields => "发送者ID、接收者ID和消息内容不能为空",
            AppError::MessagingMissingReadFields => "会话ID和用户ID不能为空",
            AppError::MessagingMissingUserId => "用户ID不能为空",
            AppError::MessagingForbidden => "无权限删除此会话",

            AppError::UploadsMissingFile => "没有上传文件",
            AppError::UploadsNotAnImage => "只允许上传图片文件",
            AppError::UploadsTooLarge => "文件大小超出限制",
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MessagingForbidden => StatusCode::FORBIDDEN,
            AppError::UsersNotFound
            | AppError::AddressesNotFound
            | AppError::GoodsNotFound
            | AppError::OrdersNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn response_parts(&self) -> (StatusCode, Json<ErrorEnvelope>) {
        let status = self.http_status_code();
        let response = ErrorEnvelope {
            code: self.code(),
            success: crate::models::envelope::FAILURE,
            msg: self.message(),
        };
        (status, Json(response))
    }
}

#[derive(Serialize)]
pub struct ErrorEnvelope {
    pub code: u16,
    pub success: &'static str,
    pub msg: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_codes_track_http_status() {
        assert_eq!(AppError::Unexpected.code(), 500);
        assert_eq!(AppError::MessagingForbidden.code(), 403);
        assert_eq!(AppError::GoodsNotFound.code(), 404);
        assert_eq!(AppError::LikesAlreadyExists.code(), 400);
        for err in [
            AppError::Unexpected,
            AppError::MessagingForbidden,
            AppError::GoodsNotFound,
            AppError::LikesAlreadyExists,
        ] {
            assert_eq!(err.http_status_code().as_u16(), err.code());
        }
    }

    #[test]
    fn error_envelope_is_the_unified_failure_shape() {
        let (_, Json(body)) = AppError::UsersInvalidCredentials.response_parts();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], 400);
        assert_eq!(json["success"], "失败");
        assert_eq!(json["msg"], "账号或密码错误");
    }
}
