use emlak_api::error::ApiError;
use emlak_api::handlers::require_admin;
use emlak_api::usecase::auth::{LoginInput, LoginUseCase};
use emlak_auth_types::identity::Identity;
use emlak_auth_types::token::validate_access_token;
use emlak_domain::role::Role;
use emlak_testing::auth::TestAuth;

use crate::helpers::{MockUserRepo, TEST_JWT_SECRET, test_user};

// ── LoginUseCase ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn login_with_correct_credentials_issues_token_with_stored_role() {
    let user = test_user("admin@example.com", Role::Admin);
    let usecase = LoginUseCase {
        repo: MockUserRepo::with(vec![user.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let out = usecase
        .execute(LoginInput {
            email: "admin@example.com".to_owned(),
            password: "parola42".to_owned(),
        })
        .await
        .unwrap();

    let info = validate_access_token(&out.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
    assert_eq!(info.email, user.email);
    assert_eq!(info.role, Role::Admin);
    assert_eq!(info.access_token_exp, out.access_token_exp);
}

#[tokio::test]
async fn login_with_wrong_password_fails_with_invalid_credentials() {
    let user = test_user("member@example.com", Role::Member);
    let usecase = LoginUseCase {
        repo: MockUserRepo::with(vec![user]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(LoginInput {
            email: "member@example.com".to_owned(),
            password: "wrong-password".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiError::InvalidCredentials)));
}

#[tokio::test]
async fn login_with_unknown_email_fails_the_same_way_as_wrong_password() {
    let usecase = LoginUseCase {
        repo: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(LoginInput {
            email: "nobody@example.com".to_owned(),
            password: "whatever".to_owned(),
        })
        .await;
    // Indistinguishable from a wrong password.
    assert!(matches!(result, Err(ApiError::InvalidCredentials)));
}

// ── Role guard ───────────────────────────────────────────────────────────────

fn identity_from_token(token: &str) -> Identity {
    let info = validate_access_token(token, TEST_JWT_SECRET).unwrap();
    Identity {
        user_id: info.user_id,
        email: info.email,
        role: info.role,
    }
}

#[tokio::test]
async fn admin_token_passes_the_admin_guard() {
    let auth = TestAuth::mint(Role::Admin, TEST_JWT_SECRET);
    let identity = identity_from_token(&auth.token);
    assert!(require_admin(&identity).is_ok());
}

#[tokio::test]
async fn member_token_is_forbidden_by_the_admin_guard() {
    let auth = TestAuth::mint(Role::Member, TEST_JWT_SECRET);
    let identity = identity_from_token(&auth.token);
    assert!(matches!(
        require_admin(&identity),
        Err(ApiError::Forbidden)
    ));
}

#[tokio::test]
async fn minted_bearer_headers_carry_the_token() {
    let auth = TestAuth::mint(Role::Member, TEST_JWT_SECRET);
    let headers = auth.bearer_headers();
    let value = headers.get("authorization").unwrap().to_str().unwrap();
    let token = value.strip_prefix("Bearer ").unwrap();
    let info = validate_access_token(token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, auth.user_id);
}
