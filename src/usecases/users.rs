use crate::common::codes::{self, CodeCheck};
use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::users::{
    LoginArgs, LoginByCodeArgs, RegisterArgs, SendCodeArgs, UpdatePasswordArgs, UpdatePhoneArgs,
    UpdateUserInfoArgs, UserInfo,
};
use crate::repositories::users;
use crate::repositories::users::{NewUser, UserChanges};
use tracing::info;

/// `1` followed by `3..=9` and nine more digits, the mainland mobile format
/// the client enforces on its side as well.
pub fn is_valid_phone(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    bytes.len() == 11
        && bytes[0] == b'1'
        && (b'3'..=b'9').contains(&bytes[1])
        && bytes[2..].iter().all(|b| b.is_ascii_digit())
}

fn password_matches(stored: Option<&str>, given: &str) -> bool {
    let Some(stored) = stored else {
        return false;
    };
    // Rows predating the hash migration hold plaintext; bcrypt rejects those
    // as malformed, so fall back to direct comparison for them.
    match bcrypt::verify(given, stored) {
        Ok(matches) => matches,
        Err(_) => stored == given,
    }
}

fn hash_password(password: &str) -> ServiceResult<String> {
    match bcrypt::hash(password, bcrypt::DEFAULT_COST) {
        Ok(hash) => Ok(hash),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<UserInfo>> {
    match users::fetch_all(ctx).await {
        Ok(users) => Ok(users.into_iter().map(UserInfo::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn login<C: Context>(ctx: &C, args: LoginArgs) -> ServiceResult<UserInfo> {
    let password = args.password.as_deref().unwrap_or_default();
    let user = match (args.account.as_deref(), args.phone.as_deref()) {
        (Some(account), _) => users::fetch_one_by_account(ctx, account).await?,
        (None, Some(phone)) => users::fetch_one_by_phone(ctx, phone).await?,
        (None, None) => return Err(AppError::UsersMissingCredentials),
    };
    match user {
        Some(user) if password_matches(user.password.as_deref(), password) => {
            Ok(UserInfo::from(user))
        }
        _ => Err(AppError::UsersInvalidCredentials),
    }
}

pub async fn register<C: Context>(
    ctx: &C,
    args: RegisterArgs,
    image: Option<String>,
) -> ServiceResult<UserInfo> {
    let password_hash = match args.password.as_deref() {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };
    let userid = users::create(
        ctx,
        NewUser {
            username: args.username.as_deref(),
            account: args.account.as_deref(),
            password_hash,
            phone: args.phone.as_deref(),
            sex: args.sex.as_deref(),
            identity: args.identity.as_deref(),
            image: image.as_deref(),
        },
    )
    .await? as i64;

    match users::fetch_one(ctx, userid).await? {
        Some(user) => Ok(UserInfo::from(user)),
        None => Err(AppError::UsersNotFound),
    }
}

pub async fn update<C: Context>(
    ctx: &C,
    args: UpdateUserInfoArgs,
    image: Option<String>,
) -> ServiceResult<UserInfo> {
    let Some(userid) = args.userid else {
        return Err(AppError::UsersMissingUserId);
    };
    let password_hash = match args.password.as_deref() {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };
    let changes = UserChanges {
        account: args.account,
        password_hash,
        username: args.username,
        sex: args.sex,
        phone: args.phone,
        identity: args.identity,
        image,
    };
    if changes.is_empty() {
        return Err(AppError::UsersNothingToUpdate);
    }

    let affected = users::update(ctx, userid, changes).await?;
    if affected == 0 {
        return Err(AppError::UsersNotFound);
    }
    match users::fetch_one(ctx, userid).await? {
        Some(user) => Ok(UserInfo::from(user)),
        None => Err(AppError::UsersNotFound),
    }
}

/// Issues a six digit verification code for the phone. There is no SMS
/// gateway attached, so the code is returned to the caller and logged.
pub fn send_code<C: Context>(ctx: &C, args: SendCodeArgs) -> ServiceResult<String> {
    let Some(phone) = args.phone.as_deref() else {
        return Err(AppError::UsersInvalidPhone);
    };
    if !is_valid_phone(phone) {
        return Err(AppError::UsersInvalidPhone);
    }

    let code = codes::generate_code();
    ctx.codes().issue(phone, code.clone());
    info!(phone, code, "issued verification code");
    Ok(code)
}

pub async fn login_by_code<C: Context>(ctx: &C, args: LoginByCodeArgs) -> ServiceResult<UserInfo> {
    let Some(phone) = args.phone.as_deref() else {
        return Err(AppError::UsersInvalidPhone);
    };
    if !is_valid_phone(phone) {
        return Err(AppError::UsersInvalidPhone);
    }
    let Some(code) = args.code.as_deref() else {
        return Err(AppError::UsersMissingCode);
    };

    match ctx.codes().verify(phone, code) {
        CodeCheck::Valid => {}
        CodeCheck::NotFound => return Err(AppError::UsersCodeNotFound),
        CodeCheck::Expired => return Err(AppError::UsersCodeExpired),
        CodeCheck::Mismatch => return Err(AppError::UsersCodeMismatch),
    }

    if let Some(user) = users::fetch_one_by_phone(ctx, phone).await? {
        return Ok(UserInfo::from(user));
    }

    // First login with this phone registers a bare account on the fly.
    let account = format!("user_{phone}");
    let userid = users::create_by_phone(ctx, phone, &account).await? as i64;
    match users::fetch_one(ctx, userid).await? {
        Some(user) => {
            let mut info = UserInfo::from(user);
            info.is_new_user = true;
            Ok(info)
        }
        None => Err(AppError::UsersNotFound),
    }
}

pub async fn update_password<C: Context>(ctx: &C, args: UpdatePasswordArgs) -> ServiceResult<()> {
    let (Some(userid), Some(old_password), Some(new_password)) = (
        args.userid,
        args.old_password.as_deref(),
        args.new_password.as_deref(),
    ) else {
        return Err(AppError::UsersMissingPasswordFields);
    };

    let Some(user) = users::fetch_one(ctx, userid).await? else {
        return Err(AppError::UsersWrongOldPassword);
    };
    if !password_matches(user.password.as_deref(), old_password) {
        return Err(AppError::UsersWrongOldPassword);
    }

    let password_hash = hash_password(new_password)?;
    users::update_password(ctx, userid, &password_hash).await?;
    Ok(())
}

pub async fn update_phone<C: Context>(ctx: &C, args: UpdatePhoneArgs) -> ServiceResult<()> {
    let (Some(userid), Some(new_phone)) = (args.userid, args.new_phone.as_deref()) else {
        return Err(AppError::UsersMissingPhoneFields);
    };
    if !is_valid_phone(new_phone) {
        return Err(AppError::UsersInvalidPhone);
    }

    let affected = users::update_phone(ctx, userid, new_phone).await?;
    if affected == 0 {
        return Err(AppError::UsersNotFound);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_validation_matches_mainland_format() {
        assert!(is_valid_phone("13812345678"));
        assert!(is_valid_phone("19900000000"));
        assert!(!is_valid_phone("12812345678"));
        assert!(!is_valid_phone("1381234567"));
        assert!(!is_valid_phone("138123456789"));
        assert!(!is_valid_phone("1381234567a"));
        assert!(!is_valid_phone("23812345678"));
    }

    #[test]
    fn plaintext_rows_still_authenticate() {
        assert!(password_matches(Some("123456"), "123456"));
        assert!(!password_matches(Some("123456"), "654321"));
        assert!(!password_matches(None, "123456"));

        let hash = bcrypt::hash("secret", 4).unwrap();
        assert!(password_matches(Some(&hash), "secret"));
        assert!(!password_matches(Some(&hash), "wrong"));
    }
}
