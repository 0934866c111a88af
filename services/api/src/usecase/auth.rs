use emlak_auth_types::token::issue_access_token;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::ApiError;

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginOutput {
    pub user: User,
    pub access_token: String,
    pub access_token_exp: u64,
}

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: UserRepository> LoginUseCase<R> {
    /// Verify credentials and issue an access token.
    ///
    /// Unknown email and wrong password are indistinguishable: both fail
    /// with `InvalidCredentials`.
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, ApiError> {
        let user = self
            .repo
            .find_by_email(&input.email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        let password_matches = bcrypt::verify(&input.password, &user.password_hash)
            .map_err(|e| ApiError::Internal(e.into()))?;
        if !password_matches {
            return Err(ApiError::InvalidCredentials);
        }

        let (access_token, access_token_exp) =
            issue_access_token(user.id, &user.email, user.role, &self.jwt_secret)
                .map_err(|e| ApiError::Internal(e.into()))?;

        Ok(LoginOutput {
            user,
            access_token,
            access_token_exp,
        })
    }
}
