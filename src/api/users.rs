use crate::api::RequestContext;
use crate::api::extract::FormPayload;
use crate::common::error::ServiceResponse;
use crate::common::state::AppState;
use crate::models::envelope::{Envelope, EnvelopeBase};
use crate::models::users::{
    LoginArgs, LoginByCodeArgs, RegisterArgs, SendCodeArgs, SendCodeResponse, UpdatePasswordArgs,
    UpdatePhoneArgs, UpdateUserInfoArgs, UserInfo,
};
use crate::usecases::users;
use axum::routing::post;
use axum::{Json, Router};

const AVATAR_PREFIX: &str = "avatar";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(list))
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/updateUserInfo", post(update_user_info))
        .route("/sendVerificationCode", post(send_verification_code))
        .route("/loginByCode", post(login_by_code))
        .route("/updatePassword", post(update_password))
        .route("/updatePhone", post(update_phone))
}

pub async fn list(ctx: RequestContext) -> ServiceResponse<Envelope<Vec<UserInfo>>> {
    let users = users::fetch_all(&ctx).await?;
    Ok(Json(Envelope::ok(users)))
}

pub async fn login(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<LoginArgs>,
) -> ServiceResponse<Envelope<UserInfo>> {
    let user = users::login(&ctx, args).await?;
    Ok(Json(Envelope::ok_msg("登录成功", user)))
}

pub async fn register(
    ctx: RequestContext,
    mut payload: FormPayload<RegisterArgs>,
) -> ServiceResponse<Envelope<UserInfo>> {
    let image = match payload.take_file("image") {
        Some(part) => Some(
            ctx.uploads
                .store_image(
                    AVATAR_PREFIX,
                    &part.file_name,
                    part.content_type.as_deref(),
                    &part.data,
                )
                .await?
                .public_path,
        ),
        None => None,
    };
    let user = users::register(&ctx, payload.args, image).await?;
    Ok(Json(Envelope::ok_msg("注册成功", user)))
}

pub async fn update_user_info(
    ctx: RequestContext,
    mut payload: FormPayload<UpdateUserInfoArgs>,
) -> ServiceResponse<Envelope<UserInfo>> {
    let image = match payload.take_file("image") {
        Some(part) => Some(
            ctx.uploads
                .store_image(
                    AVATAR_PREFIX,
                    &part.file_name,
                    part.content_type.as_deref(),
                    &part.data,
                )
                .await?
                .public_path,
        ),
        None => None,
    };
    let user = users::update(&ctx, payload.args, image).await?;
    Ok(Json(Envelope::ok_msg("用户信息更新成功", user)))
}

pub async fn send_verification_code(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<SendCodeArgs>,
) -> ServiceResponse<SendCodeResponse> {
    let code = users::send_code(&ctx, args)?;
    Ok(Json(SendCodeResponse {
        base: EnvelopeBase::ok_msg("验证码发送成功"),
        dev_code: code,
    }))
}

pub async fn login_by_code(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<LoginByCodeArgs>,
) -> ServiceResponse<Envelope<UserInfo>> {
    let user = users::login_by_code(&ctx, args).await?;
    Ok(Json(Envelope::ok_msg("登录成功", user)))
}

pub async fn update_password(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<UpdatePasswordArgs>,
) -> ServiceResponse<Envelope<()>> {
    users::update_password(&ctx, args).await?;
    Ok(Json(Envelope::msg_only("密码修改成功")))
}

pub async fn update_phone(
    ctx: RequestContext,
    FormPayload { args, .. }: FormPayload<UpdatePhoneArgs>,
) -> ServiceResponse<Envelope<()>> {
    users::update_phone(&ctx, args).await?;
    Ok(Json(Envelope::msg_only("手机号修改成功")))
}
